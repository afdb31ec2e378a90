use colored::Colorize;
use std::fmt;

use crate::pagination::IteratorView;

/// What the terminal should show for one iterator state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub loading: bool,
    pub card: Option<Card>,
}

/// The current user plus the navigation buttons
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub picture: String,
    pub name: String,
    pub email: String,
    pub position: usize,
    pub total: usize,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

/// Pure mapping from iterator state to screen
pub fn render(view: &IteratorView<'_>) -> Screen {
    Screen {
        loading: view.loading,
        card: build_card(view),
    }
}

fn build_card(view: &IteratorView<'_>) -> Option<Card> {
    if view.loading {
        return None;
    }
    let index = view.current?;
    let user = view.current_user()?;

    Some(Card {
        picture: user.picture.medium.clone(),
        name: user.display_name(),
        email: user.email.clone(),
        position: index + 1,
        total: view.users.len(),
        prev_enabled: index != 0,
        next_enabled: true,
    })
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.loading {
            writeln!(f, "{}", "Loading...".yellow().bold())?;
        }
        if let Some(card) = &self.card {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counter = format!("[{}/{}]", self.position, self.total);
        writeln!(f, "{} {} <{}>", counter.dimmed(), self.name.bold(), self.email)?;
        writeln!(f, "  {}", self.picture.cyan().underline())?;
        writeln!(
            f,
            "  {}  {}",
            button("Prev", self.prev_enabled),
            button("Next", self.next_enabled)
        )
    }
}

fn button(label: &str, enabled: bool) -> String {
    let text = format!("[ {} ]", label);
    if enabled {
        text.green().to_string()
    } else {
        text.dimmed().strikethrough().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Name, Picture, User};

    fn users(count: usize) -> Vec<User> {
        (0..count)
            .map(|i| User {
                name: Name {
                    title: "Dr".into(),
                    first: "Maria".into(),
                    last: format!("Nowak{}", i),
                },
                email: format!("maria{}@example.test", i),
                picture: Picture {
                    large: format!("https://img.test/l/{}.jpg", i),
                    medium: format!("https://img.test/m/{}.jpg", i),
                    thumbnail: format!("https://img.test/t/{}.jpg", i),
                },
            })
            .collect()
    }

    #[test]
    fn test_loading_hides_card() {
        let users = users(3);
        let view = IteratorView {
            current: Some(1),
            users: &users,
            loading: true,
        };

        let screen = render(&view);

        assert!(screen.loading);
        assert_eq!(screen.card, None);
    }

    #[test]
    fn test_empty_list_renders_nothing() {
        let view = IteratorView {
            current: None,
            users: &[],
            loading: false,
        };

        assert_eq!(
            render(&view),
            Screen {
                loading: false,
                card: None
            }
        );
        assert_eq!(render(&view).to_string(), "");
    }

    #[test]
    fn test_card_shows_medium_picture() {
        let users = users(5);
        let view = IteratorView {
            current: Some(2),
            users: &users,
            loading: false,
        };

        let card = render(&view).card.unwrap();

        assert_eq!(card.picture, "https://img.test/m/2.jpg");
        assert_eq!(card.name, "Dr Maria Nowak2");
        assert_eq!((card.position, card.total), (3, 5));
        assert!(card.prev_enabled);
        assert!(card.next_enabled);
    }

    #[test]
    fn test_prev_disabled_on_first_user() {
        let users = users(5);
        let view = IteratorView {
            current: Some(0),
            users: &users,
            loading: false,
        };

        let card = render(&view).card.unwrap();

        assert!(!card.prev_enabled);
        assert!(card.next_enabled);
    }

    #[test]
    fn test_display_lists_picture_and_buttons() {
        colored::control::set_override(false);
        let users = users(1);
        let view = IteratorView {
            current: Some(0),
            users: &users,
            loading: false,
        };

        let text = render(&view).to_string();

        assert!(text.contains("[1/1] Dr Maria Nowak0 <maria0@example.test>"));
        assert!(text.contains("https://img.test/m/0.jpg"));
        assert!(text.contains("[ Prev ]  [ Next ]"));
    }
}
