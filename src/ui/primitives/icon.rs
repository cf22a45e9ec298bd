use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Arrow,
    Bullet,
    Featured,
    Link,
    Mail,
    Cursor,
    Ongoing,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Bullet) => theme::icons::BULLET,
            (true, Icon::Featured) => theme::icons::FEATURED,
            (true, Icon::Link) => theme::icons::LINK,
            (true, Icon::Mail) => theme::icons::MAIL,
            (true, Icon::Cursor) => theme::icons::CURSOR,
            (true, Icon::Ongoing) => theme::icons::ONGOING,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Bullet) => theme::icons_ascii::BULLET,
            (false, Icon::Featured) => theme::icons_ascii::FEATURED,
            (false, Icon::Link) => theme::icons_ascii::LINK,
            (false, Icon::Mail) => theme::icons_ascii::MAIL,
            (false, Icon::Cursor) => theme::icons_ascii::CURSOR,
            (false, Icon::Ongoing) => theme::icons_ascii::ONGOING,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success | Icon::Ongoing => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning | Icon::Featured => theme::colors::WARNING,
            Icon::Arrow | Icon::Bullet => theme::colors::DIM,
            Icon::Link | Icon::Mail | Icon::Cursor => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
