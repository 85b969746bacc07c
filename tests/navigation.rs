use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use tabpager::nav::{
    ControllerState, LabelResolver, NavError, NavigationController, Page, PageFactory, PageSet,
    PageState, SettingsLauncher, SwipeDirection,
};
use uuid::Uuid;

struct TestPage {
    id: Uuid,
    name: String,
    state: PageState,
}

impl Page for TestPage {
    fn id(&self) -> Uuid {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn state(&self) -> PageState {
        self.state
    }

    fn activate(&mut self) {
        self.state = PageState::Active;
    }

    fn retain(&mut self) {
        self.state = PageState::Retained;
    }

    fn destroy(&mut self) {
        self.state = PageState::Destroyed;
    }
}

#[derive(Clone)]
struct TestFactory {
    names: Vec<String>,
    created: Arc<AtomicUsize>,
}

impl TestFactory {
    fn new(names: &[&str]) -> Self {
        Self {
            names: names.iter().map(|n| n.to_string()).collect(),
            created: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }
}

impl PageFactory for TestFactory {
    fn page_count(&self) -> usize {
        self.names.len()
    }

    fn create(&self, position: usize) -> Result<Box<dyn Page>, NavError> {
        self.check_position(position)?;
        self.created.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(TestPage {
            id: Uuid::new_v4(),
            name: self.names[position].clone(),
            state: PageState::Uncreated,
        }))
    }
}

#[derive(Clone, Default)]
struct CountingLauncher(Arc<AtomicUsize>);

impl SettingsLauncher for CountingLauncher {
    fn launch(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

const NAMES: [&str; 3] = ["collection", "playing", "visualization"];

fn build(names: &[&str]) -> (Result<NavigationController, NavError>, TestFactory) {
    let factory = TestFactory::new(names);
    let controller = NavigationController::new(
        PageSet::new(names.iter().copied()),
        &LabelResolver::default(),
        Box::new(factory.clone()),
        Box::new(CountingLauncher::default()),
    );
    (controller, factory)
}

fn controller() -> NavigationController {
    build(&NAMES).0.unwrap()
}

fn assert_in_sync(controller: &NavigationController) {
    let selection = controller.selection();
    assert_eq!(controller.tabs().current_index(), Some(selection));
    assert_eq!(controller.host().current(), selection);
}

#[test]
fn scenario_a_initial_tabs_and_selection() {
    let controller = controller();
    let resolver = LabelResolver::default();

    assert_eq!(controller.state(), ControllerState::Ready);
    assert_eq!(controller.tabs().len(), 3);
    for (i, name) in NAMES.iter().enumerate() {
        assert_eq!(controller.tabs().label(i), resolver.resolve(name).ok());
    }
    assert_eq!(controller.selection(), 0);
    assert_eq!(controller.tabs().current_index(), Some(0));
    assert!(controller.tabs().tabs()[0].selected);
    assert_eq!(
        controller.tabs().tabs().iter().filter(|t| t.selected).count(),
        1
    );
}

#[test]
fn scenario_b_tab_selection_moves_pages_then_tab_display() {
    let mut controller = controller();
    let updates = controller.tabs().display_updates();

    controller.on_tab_selected(2).unwrap();

    assert_eq!(controller.host().current(), 2);
    assert_eq!(controller.tabs().current_index(), Some(2));
    assert_eq!(controller.tabs().display_updates(), updates + 1);
    assert_eq!(controller.stats().tab_selected, 1);
    assert_eq!(controller.stats().page_selected, 1);
    assert_in_sync(&controller);
}

#[test]
fn scenario_c_swipe_updates_tabs_without_tab_selection() {
    let mut controller = controller();

    controller.swipe(SwipeDirection::Right).unwrap();

    assert_eq!(controller.selection(), 1);
    assert_eq!(controller.tabs().current_index(), Some(1));
    assert_eq!(controller.stats().page_selected, 1);
    assert_eq!(controller.stats().tab_selected, 0);
    assert_in_sync(&controller);
}

#[test]
fn scenario_d_missing_label_aborts_construction() {
    let (result, factory) = build(&["collection", "playing", "equalizer"]);

    let err = result.err().unwrap();
    assert_eq!(
        err,
        NavError::MissingLabel {
            name: "equalizer".into()
        }
    );
    assert!(err.is_configuration());
    assert_eq!(factory.created(), 0);
}

#[test]
fn scenario_e_out_of_range_tab_is_rejected() {
    let mut controller = controller();
    controller.on_tab_selected(1).unwrap();
    let stats = controller.stats();

    assert_eq!(
        controller.on_tab_selected(5),
        Err(NavError::IndexOutOfRange { index: 5, count: 3 })
    );
    assert_eq!(controller.selection(), 1);
    assert_eq!(controller.stats(), stats);
    assert_in_sync(&controller);
}

#[test]
fn tabs_and_pages_stay_in_sync_across_mixed_events() {
    let mut controller = controller();
    controller.press_tab(2).unwrap();
    assert_in_sync(&controller);

    for _ in 0..3 {
        controller.swipe(SwipeDirection::Left).unwrap();
        assert_in_sync(&controller);
    }
    assert_eq!(controller.selection(), 0);

    controller.on_tab_selected(1).unwrap();
    assert_in_sync(&controller);
    controller.swipe(SwipeDirection::Right).unwrap();
    assert_in_sync(&controller);

    assert_eq!(controller.selection(), 2);
}

#[test]
fn page_change_notification_keeps_container_in_sync() {
    let mut controller = controller();

    controller.on_page_selected(2).unwrap();
    assert_in_sync(&controller);
    assert_eq!(controller.host().state_of(2), Some(PageState::Active));

    controller.swipe(SwipeDirection::Left).unwrap();
    assert_eq!(controller.selection(), 1);
    assert_in_sync(&controller);
}

#[test]
fn pages_are_memoized_and_retained() {
    let (result, factory) = build(&NAMES);
    let mut controller = result.unwrap();

    let first: Vec<Uuid> = (0..3)
        .map(|i| controller.page_mut(i).unwrap().id())
        .collect();
    let again: Vec<Uuid> = (0..3)
        .map(|i| controller.page_mut(i).unwrap().id())
        .collect();
    assert_eq!(first, again);

    controller.press_tab(2).unwrap();
    controller.press_tab(0).unwrap();
    assert_eq!(controller.page_mut(0).unwrap().id(), first[0]);
    assert_eq!(controller.page_mut(2).unwrap().id(), first[2]);
    assert_eq!(factory.created(), 3);
}

#[test]
fn only_the_current_page_is_active() {
    let mut controller = controller();
    controller.press_tab(1).unwrap();

    let states: Vec<_> = (0..3)
        .map(|i| controller.host().state_of(i).unwrap())
        .collect();
    assert_eq!(
        states,
        vec![PageState::Retained, PageState::Active, PageState::Retained]
    );
}

#[test]
fn settings_are_launched_on_request() {
    let launcher = CountingLauncher::default();
    let controller = NavigationController::new(
        PageSet::default(),
        &LabelResolver::default(),
        Box::new(TestFactory::new(&NAMES)),
        Box::new(launcher.clone()),
    )
    .unwrap();

    controller.open_settings().unwrap();
    controller.open_settings().unwrap();
    assert_eq!(launcher.0.load(Ordering::SeqCst), 2);
}

#[test]
fn teardown_destroys_every_page() {
    let mut controller = controller();
    controller.teardown().unwrap();

    for i in 0..3 {
        assert_eq!(controller.host().state_of(i), Some(PageState::Destroyed));
    }
    assert_eq!(controller.swipe(SwipeDirection::Right), Err(NavError::TornDown));
}
