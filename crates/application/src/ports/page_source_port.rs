//! Page source port
//!
//! Fetching is owned by the host; providers only ever see page text.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for fetching raw page content
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PageSourcePort: Send + Sync {
    /// Fetch the body of the page at `url` as text
    async fn fetch_page(&self, url: &str) -> Result<String, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn PageSourcePort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn PageSourcePort>();
    }

    #[tokio::test]
    async fn mock_returns_page() {
        let mut mock = MockPageSourcePort::new();
        mock.expect_fetch_page()
            .withf(|url| url == "http://rp5.ua/")
            .returning(|_| Ok("<html></html>".to_string()));

        let page = mock.fetch_page("http://rp5.ua/").await.unwrap();
        assert_eq!(page, "<html></html>");
    }
}
