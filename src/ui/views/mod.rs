pub mod collection;
pub mod playing;
pub mod visualization;

pub use collection::CollectionPage;
pub use playing::PlayingPage;
pub use visualization::VisualizationPage;

use crate::nav::{NavError, Page, PageFactory};

/// Builds the three stock pages in their fixed order.
#[derive(Debug, Default, Clone, Copy)]
pub struct StockPageFactory;

impl PageFactory for StockPageFactory {
    fn page_count(&self) -> usize {
        3
    }

    fn create(&self, position: usize) -> Result<Box<dyn Page>, NavError> {
        self.check_position(position)?;
        let page: Box<dyn Page> = match position {
            0 => Box::new(CollectionPage::new()),
            1 => Box::new(PlayingPage::new()),
            _ => Box::new(VisualizationPage::new()),
        };
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::PageSet;

    #[test]
    fn test_stock_factory_matches_default_page_set() {
        let factory = StockPageFactory;
        let set = PageSet::default();
        assert_eq!(factory.page_count(), set.len());

        for (position, name) in set.iter().enumerate() {
            assert_eq!(factory.create(position).unwrap().name(), name);
        }
        assert_eq!(
            factory.create(3).err(),
            Some(NavError::InvalidPosition {
                position: 3,
                count: 3
            })
        );
    }
}
