use tracing::{debug, info};

use super::{
    error::NavError,
    factory::PageFactory,
    page::{Page, PageState},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

/// Swipeable page container and owner of every page instance.
///
/// Pages are retained for the whole lifetime of the host: once a position has
/// been materialized it keeps the same instance until [`PageHost::destroy_all`],
/// no matter how far the user swipes away from it.
pub struct PageHost {
    factory: Box<dyn PageFactory>,
    slots: Vec<Option<Box<dyn Page>>>,
    current: usize,
    alive: bool,
}

impl PageHost {
    pub fn new(factory: Box<dyn PageFactory>) -> Self {
        let count = factory.page_count();
        Self {
            factory,
            slots: (0..count).map(|_| None).collect(),
            current: 0,
            alive: true,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of non-visible pages kept materialized. Always the full count.
    pub fn retention_limit(&self) -> usize {
        self.slots.len()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn state_of(&self, position: usize) -> Option<PageState> {
        self.slots.get(position).map(|slot| match slot {
            Some(page) => page.state(),
            None => PageState::Uncreated,
        })
    }

    pub fn materialized(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Materializes every page, marking `current` active and the rest retained.
    pub fn ensure_window(&mut self, current: usize) -> Result<(), NavError> {
        self.check_alive()?;
        self.check_index(current)?;

        self.current = current;
        for position in 0..self.slots.len() {
            let page = self.get(position)?;
            if position == current {
                page.activate();
            } else {
                page.retain();
            }
        }
        Ok(())
    }

    /// Returns the page at `position`, creating it on first access.
    pub fn get(&mut self, position: usize) -> Result<&mut Box<dyn Page>, NavError> {
        self.check_alive()?;
        self.check_index(position)?;

        if self.slots[position].is_none() {
            let mut page = self.factory.create(position)?;
            debug!(position, page = page.name(), id = %page.id(), "materialized page");
            if position == self.current {
                page.activate();
            } else {
                page.retain();
            }
            self.slots[position] = Some(page);
        }

        let count = self.slots.len();
        self.slots[position]
            .as_mut()
            .ok_or(NavError::InvalidPosition { position, count })
    }

    pub fn current_page(&mut self) -> Result<&mut Box<dyn Page>, NavError> {
        self.get(self.current)
    }

    /// "Set current item". Returns the page-change notification, if the
    /// position actually moved.
    pub fn set_current_item(&mut self, position: usize) -> Result<Option<usize>, NavError> {
        self.check_alive()?;
        self.check_index(position)?;

        if position == self.current {
            return Ok(None);
        }

        let previous = self.current;
        self.get(previous)?.retain();
        self.current = position;
        self.get(position)?.activate();
        debug!(from = previous, to = position, "page container moved");

        Ok(Some(position))
    }

    pub fn swipe(&mut self, direction: SwipeDirection) -> Result<Option<usize>, NavError> {
        self.check_alive()?;

        let target = match direction {
            SwipeDirection::Left => self.current.checked_sub(1),
            SwipeDirection::Right => Some(self.current + 1).filter(|&next| next < self.len()),
        };

        match target {
            Some(position) => self.set_current_item(position),
            None => Ok(None),
        }
    }

    pub fn for_each_materialized(&mut self, mut f: impl FnMut(usize, &mut dyn Page)) {
        if !self.alive {
            return;
        }
        for (position, slot) in self.slots.iter_mut().enumerate() {
            if let Some(page) = slot {
                f(position, page.as_mut());
            }
        }
    }

    /// Destroys every page. Only for final teardown.
    ///
    /// The destroyed instances stay in their slots so their final state can
    /// still be read through [`PageHost::state_of`]; every other access
    /// reports [`NavError::TornDown`].
    pub fn destroy_all(&mut self) -> Result<(), NavError> {
        self.check_alive()?;

        for page in self.slots.iter_mut().flatten() {
            page.destroy();
        }
        self.alive = false;
        info!(pages = self.slots.len(), "page host torn down");

        Ok(())
    }

    fn check_alive(&self) -> Result<(), NavError> {
        if self.alive {
            Ok(())
        } else {
            Err(NavError::TornDown)
        }
    }

    fn check_index(&self, index: usize) -> Result<(), NavError> {
        if index < self.slots.len() {
            Ok(())
        } else {
            Err(NavError::IndexOutOfRange {
                index,
                count: self.slots.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::stub::StubFactory;

    fn host() -> (PageHost, StubFactory) {
        let factory = StubFactory::new(["a", "b", "c"]);
        (PageHost::new(Box::new(factory.clone())), factory)
    }

    #[test]
    fn test_get_is_lazy_and_memoized() {
        let (mut host, factory) = host();
        assert_eq!(host.materialized(), 0);
        assert_eq!(host.state_of(1), Some(PageState::Uncreated));

        let first = host.get(1).unwrap().id();
        let second = host.get(1).unwrap().id();

        assert_eq!(first, second);
        assert_eq!(factory.created(), 1);
        assert_eq!(host.state_of(1), Some(PageState::Retained));
    }

    #[test]
    fn test_ensure_window_retains_all() {
        let (mut host, factory) = host();
        host.ensure_window(2).unwrap();

        assert_eq!(host.retention_limit(), 3);
        assert_eq!(host.materialized(), 3);
        assert_eq!(factory.created(), 3);
        assert_eq!(host.current(), 2);
        assert_eq!(host.state_of(0), Some(PageState::Retained));
        assert_eq!(host.state_of(1), Some(PageState::Retained));
        assert_eq!(host.state_of(2), Some(PageState::Active));
    }

    #[test]
    fn test_set_current_item_reports_only_changes() {
        let (mut host, _) = host();
        host.ensure_window(0).unwrap();

        assert_eq!(host.set_current_item(0), Ok(None));
        assert_eq!(host.set_current_item(2), Ok(Some(2)));
        assert_eq!(host.state_of(0), Some(PageState::Retained));
        assert_eq!(host.state_of(2), Some(PageState::Active));
        assert_eq!(
            host.set_current_item(3),
            Err(NavError::IndexOutOfRange { index: 3, count: 3 })
        );
        assert_eq!(host.current(), 2);
    }

    #[test]
    fn test_swipe_is_clamped_at_edges() {
        let (mut host, _) = host();
        host.ensure_window(0).unwrap();

        assert_eq!(host.swipe(SwipeDirection::Left), Ok(None));
        assert_eq!(host.swipe(SwipeDirection::Right), Ok(Some(1)));
        assert_eq!(host.swipe(SwipeDirection::Right), Ok(Some(2)));
        assert_eq!(host.swipe(SwipeDirection::Right), Ok(None));
        assert_eq!(host.current(), 2);
    }

    #[test]
    fn test_pages_survive_swiping_away() {
        let (mut host, factory) = host();
        host.ensure_window(0).unwrap();
        let ids: Vec<_> = (0..3).map(|i| host.get(i).unwrap().id()).collect();

        for _ in 0..2 {
            host.swipe(SwipeDirection::Right).unwrap();
        }
        for _ in 0..2 {
            host.swipe(SwipeDirection::Left).unwrap();
        }

        let after: Vec<_> = (0..3).map(|i| host.get(i).unwrap().id()).collect();
        assert_eq!(ids, after);
        assert_eq!(factory.created(), 3);
    }

    #[test]
    fn test_for_each_materialized_visits_live_pages() {
        let (mut host, _) = host();
        host.get(2).unwrap();

        let mut visited = Vec::new();
        host.for_each_materialized(|position, page| visited.push((position, page.state())));
        assert_eq!(visited, vec![(2, PageState::Retained)]);

        host.ensure_window(0).unwrap();
        let mut count = 0;
        host.for_each_materialized(|_, _| count += 1);
        assert_eq!(count, 3);
    }

    #[test]
    fn test_destroy_all() {
        let (mut host, _) = host();
        host.ensure_window(1).unwrap();
        host.destroy_all().unwrap();

        assert!(!host.is_alive());
        for position in 0..3 {
            assert_eq!(host.state_of(position), Some(PageState::Destroyed));
        }
        assert_eq!(host.get(0).err(), Some(NavError::TornDown));
        assert_eq!(host.destroy_all(), Err(NavError::TornDown));

        let mut visited = 0;
        host.for_each_materialized(|_, _| visited += 1);
        assert_eq!(visited, 0);
    }
}
