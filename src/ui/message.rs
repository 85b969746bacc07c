use crate::nav::SwipeDirection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMessage {
    Quit,

    // Navigation
    Swipe(SwipeDirection),
    PressTab(usize),

    // Options menu
    OpenMenu,
    MenuNext,
    MenuPrevious,
    MenuSelect,
    CloseOverlay,

    Rescan,
}
