use super::{error::NavError, page::Page};

/// Builds page instances by position. Every call returns a fresh instance.
pub trait PageFactory: Send {
    fn page_count(&self) -> usize;

    fn create(&self, position: usize) -> Result<Box<dyn Page>, NavError>;

    fn check_position(&self, position: usize) -> Result<(), NavError> {
        let count = self.page_count();
        if position < count {
            Ok(())
        } else {
            Err(NavError::InvalidPosition { position, count })
        }
    }
}
