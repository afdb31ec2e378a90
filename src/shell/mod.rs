mod input;
mod render;

pub use input::{Action, HELP};
pub use render::{Card, Screen, render};

use anyhow::{Context, Result};
use log::warn;
use std::io::Write;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::http::PageSource;
use crate::pagination::UserIterator;

/// Drive the iterator from line commands, redrawing after every change.
///
/// Returns when the input ends or the user quits.
pub async fn run<S, R, W>(mut iterator: UserIterator<S>, input: R, output: W) -> Result<()>
where
    S: PageSource,
    R: AsyncBufRead + Unpin,
    W: Write + Send + 'static,
{
    let output = Arc::new(Mutex::new(output));
    let screen_out = Arc::clone(&output);
    iterator.subscribe(move |view| print(&screen_out, &render(view).to_string()));

    print(&output, &format!("{}\n", HELP));
    iterator.activate().await;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await.context("Failed to read command")? {
        match Action::parse(&line) {
            Some(Action::Next) => {
                iterator.next_user().await;
            }
            Some(Action::Prev) => {
                if iterator.current() == Some(0) {
                    print(&output, "Already at the first user\n");
                }
                iterator.prev_user();
            }
            Some(Action::Help) => print(&output, &format!("{}\n", HELP)),
            Some(Action::Quit) => break,
            None => {}
        }
    }

    Ok(())
}

fn print<W: Write>(output: &Mutex<W>, text: &str) {
    let Ok(mut out) = output.lock() else {
        warn!("Output writer is poisoned, dropping frame");
        return;
    };
    if let Err(e) = out.write_all(text.as_bytes()).and_then(|_| out.flush()) {
        warn!("Failed to write to terminal: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Name, Picture, ResponseInfo, User, UsersResponse};
    use crate::errors::FetchError;
    use async_trait::async_trait;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    /// Every page holds five users named after their global position
    struct CountingSource {
        page: u32,
    }

    #[async_trait]
    impl PageSource for CountingSource {
        async fn fetch_page(&mut self, _url: &str) -> Result<UsersResponse, FetchError> {
            self.page += 1;
            let first = (self.page as usize - 1) * 5;
            Ok(UsersResponse {
                results: (first..first + 5).map(user).collect(),
                info: ResponseInfo { page: self.page },
            })
        }
    }

    fn user(n: usize) -> User {
        User {
            name: Name {
                title: "Mr".into(),
                first: "Number".into(),
                last: n.to_string(),
            },
            email: format!("n{}@example.test", n),
            picture: Picture {
                large: format!("https://img.test/l/{}.jpg", n),
                medium: format!("https://img.test/m/{}.jpg", n),
                thumbnail: format!("https://img.test/t/{}.jpg", n),
            },
        }
    }

    async fn session(commands: &str) -> String {
        colored::control::set_override(false);
        let buffer = SharedBuffer::default();
        let iterator = UserIterator::new("https://example.test/api/", CountingSource { page: 0 });

        run(iterator, commands.as_bytes(), buffer.clone())
            .await
            .unwrap();

        buffer.contents()
    }

    #[tokio::test]
    async fn test_first_page_is_shown_without_input() {
        let text = session("").await;

        assert!(text.starts_with(HELP));
        assert!(text.contains("Loading..."));
        assert!(text.contains("[1/5] Mr Number 0"));
    }

    #[tokio::test]
    async fn test_next_past_page_loads_more() {
        let text = session("n\nn\nn\nn\nn\n").await;

        assert_eq!(text.matches("Loading...").count(), 2);
        assert!(text.contains("[6/10] Mr Number 5"));
        assert!(text.contains("https://img.test/m/5.jpg"));
    }

    #[tokio::test]
    async fn test_prev_on_first_user_is_refused() {
        let text = session("p\n").await;

        assert!(text.contains("Already at the first user"));
        assert_eq!(text.matches("[1/5]").count(), 1);
    }

    #[tokio::test]
    async fn test_quit_stops_reading() {
        let text = session("n\nq\nn\n").await;

        assert!(text.contains("[2/5] Mr Number 1"));
        assert!(!text.contains("[3/5]"));
    }

    #[tokio::test]
    async fn test_unknown_command_prints_help() {
        let text = session("\nwhat\n").await;

        assert_eq!(text.matches(HELP).count(), 2);
    }
}
