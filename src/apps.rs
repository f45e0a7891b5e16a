use indoc::indoc;

use crate::window::Size;

/// A launchable application: catalog identity plus its desktop icon.
#[derive(Debug, Clone, Copy)]
pub struct AppEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub glyph: &'static str,
    pub size: Size,
}

/// Everything the desktop ships with, in icon order.
pub fn catalog() -> Vec<AppEntry> {
    vec![
        AppEntry {
            id: "game",
            title: "Retro Game",
            glyph: "▶",
            size: Size::new(46, 16),
        },
        AppEntry {
            id: "about",
            title: "About",
            glyph: "?",
            size: Size::new(40, 12),
        },
        AppEntry {
            id: "download",
            title: "Downloads",
            glyph: "↓",
            size: Size::new(38, 12),
        },
        AppEntry {
            id: "fumo",
            title: "FUMO",
            glyph: "✿",
            size: Size::new(34, 14),
        },
    ]
}

/// Static body text for an app window.
pub fn content_lines(id: &str) -> &'static [&'static str] {
    match id {
        "game" => &[
            "",
            "  INSERT COIN",
            "",
            "  The arcade cabinet is warming up.",
            "  High score: 734 210",
            "",
            "  [ not yet wired to the joystick ]",
        ],
        "about" => &[
            "",
            "  retrodesk",
            "",
            "  A little desktop that lives in your",
            "  terminal. Drag the windows around,",
            "  shuffle the icons, enjoy the hum of",
            "  an imaginary CRT.",
        ],
        "download" => &[
            "",
            "  Downloads",
            "",
            "  retrodesk-0.3.tar.gz ......... done",
            "  wallpaper-pack.zip ........... done",
            "  fumo-plush-catalog.pdf ....... 98%",
        ],
        "fumo" => &[
            "",
            "     (\\__/)",
            "     (='.'=)   fumo fumo",
            "     (\")_(\")",
            "",
            "  A soft friend watches over the",
            "  desktop.",
        ],
        _ => &[],
    }
}

/// Splash shown while the desktop boots.
pub const BOOT_LOG: &str = indoc! {"
    RETRODESK BIOS v0.3
    Copyright (C) 1997-2026, Retrodesk Systems

    Memory test: 640K ... OK
    Detecting terminal ..... found (vt100 compatible)
    Mounting desktop ........ done
    Loading icon grid ....... done
    Starting window manager . done
    Spinning up fumo ........ done

    Welcome.
"};
