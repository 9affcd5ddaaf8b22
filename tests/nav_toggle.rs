use nav_toggle::prelude::*;

const SHOW: &str = "show-nav";

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// header > (button.nav-toggle-btn, ul.nav-links * n)
fn build_page(link_count: usize) -> (MemoryDom, MemoryElement, Vec<MemoryElement>) {
    init_logging();
    let dom = MemoryDom::new();
    let header = dom.insert_element(None, "header", &["site-header"]).unwrap();
    let button = dom
        .insert_element(Some(&header), "button", &["nav-toggle-btn"])
        .unwrap();
    let links = (0..link_count)
        .map(|_| dom.insert_element(Some(&header), "ul", &["nav-links"]).unwrap())
        .collect();
    (dom, button, links)
}

fn shown(dom: &MemoryDom, links: &[MemoryElement]) -> Vec<bool> {
    links
        .iter()
        .map(|link| dom.has_class(link, SHOW).unwrap())
        .collect()
}

#[test]
fn click_shows_then_hides_all_links() {
    let (dom, button, links) = build_page(2);
    let _handle = NavToggleController::install(dom.clone(), &NavToggleConfig::default()).unwrap();

    assert_eq!(shown(&dom, &links), vec![false, false]);

    dom.click(&button).unwrap();
    assert_eq!(shown(&dom, &links), vec![true, true]);

    dom.click(&button).unwrap();
    assert_eq!(shown(&dom, &links), vec![false, false]);
}

#[test]
fn links_added_after_install_are_not_toggled() {
    let (dom, button, links) = build_page(1);
    let _handle = NavToggleController::install(dom.clone(), &NavToggleConfig::default()).unwrap();

    let late = dom.insert_element(None, "ul", &["nav-links"]).unwrap();
    dom.click(&button).unwrap();

    assert!(dom.has_class(&links[0], SHOW).unwrap());
    assert!(!dom.has_class(&late, SHOW).unwrap());
}

#[test]
fn links_removed_after_install_are_still_toggled() {
    let (dom, button, links) = build_page(2);
    let _handle = NavToggleController::install(dom.clone(), &NavToggleConfig::default()).unwrap();

    dom.remove(&links[1]).unwrap();
    dom.click(&button).unwrap();

    assert_eq!(shown(&dom, &links), vec![true, true]);
}

#[test]
fn double_click_restores_every_link() {
    let (dom, button, links) = build_page(3);
    dom.add_class(&links[1], SHOW).unwrap();
    let before = shown(&dom, &links);

    let _handle = NavToggleController::install(dom.clone(), &NavToggleConfig::default()).unwrap();
    dom.click(&button).unwrap();
    dom.click(&button).unwrap();

    assert_eq!(shown(&dom, &links), before);
}

#[test]
fn links_toggle_independently() {
    let (dom, button, links) = build_page(3);
    dom.add_class(&links[0], SHOW).unwrap();
    dom.add_class(&links[2], SHOW).unwrap();

    let _handle = NavToggleController::install(dom.clone(), &NavToggleConfig::default()).unwrap();
    dom.click(&button).unwrap();

    assert_eq!(shown(&dom, &links), vec![false, true, false]);
}

#[test]
fn empty_link_group_is_a_no_op() {
    let (dom, button, _links) = build_page(0);
    let handle = NavToggleController::install(dom.clone(), &NavToggleConfig::default()).unwrap();

    assert!(handle.links().is_empty());
    assert!(handle.is_attached());
    assert_eq!(dom.click(&button).unwrap(), 1);
    assert_eq!(handle.toggle(), 0);
    assert_eq!(dom.class_names(&button).unwrap(), vec!["nav-toggle-btn".to_string()]);
}

#[test]
fn missing_toggle_control_fails_install() {
    init_logging();
    let dom = MemoryDom::new();
    let links = dom.insert_element(None, "ul", &["nav-links"]).unwrap();

    let err = NavToggleController::install(dom.clone(), &NavToggleConfig::default())
        .err()
        .expect("install should fail without a toggle control");

    match err {
        NavToggleError::ControlNotFound { selector } => assert_eq!(selector, ".nav-toggle-btn"),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(dom.listener_count(&links), 0);
}

#[test]
fn click_on_nested_icon_reaches_the_control() {
    let (dom, button, links) = build_page(1);
    let icon = dom.insert_element(Some(&button), "span", &["icon"]).unwrap();
    let _handle = NavToggleController::install(dom.clone(), &NavToggleConfig::default()).unwrap();

    dom.click(&icon).unwrap();
    assert!(dom.has_class(&links[0], SHOW).unwrap());
}

#[test]
fn detached_handle_ignores_clicks() {
    let (dom, button, links) = build_page(1);
    let handle = NavToggleController::install(dom.clone(), &NavToggleConfig::default()).unwrap();

    dom.click(&button).unwrap();
    handle.detach().unwrap();
    dom.click(&button).unwrap();

    // Class state from before the detach is kept
    assert!(dom.has_class(&links[0], SHOW).unwrap());
}

#[test]
fn custom_config_from_json() {
    init_logging();
    let dom = MemoryDom::new();
    let nav = dom.insert_element(None, "nav", &[]).unwrap();
    dom.set_id(&nav, "primary").unwrap();
    let button = dom.insert_element(Some(&nav), "button", &["menu"]).unwrap();
    let list = dom.insert_element(Some(&nav), "ul", &[]).unwrap();
    let unrelated = dom.insert_element(None, "ul", &[]).unwrap();

    let config = NavToggleConfig::from_json(
        r##"{"toggle_selector": "#primary > button.menu", "links_selector": "#primary ul", "class_name": "is-open"}"##,
    )
    .unwrap();
    let _handle = NavToggleController::install(dom.clone(), &config).unwrap();

    dom.click(&button).unwrap();
    assert!(dom.has_class(&list, "is-open").unwrap());
    assert!(!dom.has_class(&unrelated, "is-open").unwrap());
}

#[test]
fn scoped_install_only_sees_its_subtree() {
    let (dom, button, links) = build_page(1);
    let other_header = dom.insert_element(None, "header", &[]).unwrap();
    let other_button = dom
        .insert_element(Some(&other_header), "button", &["nav-toggle-btn"])
        .unwrap();
    let other_links = dom
        .insert_element(Some(&other_header), "ul", &["nav-links"])
        .unwrap();

    let scope = dom.scoped(&other_header);
    let handle = NavToggleController::install(scope, &NavToggleConfig::default()).unwrap();
    assert_eq!(*handle.control(), other_button);

    dom.click(&other_button).unwrap();
    assert!(dom.has_class(&other_links, SHOW).unwrap());
    assert!(!dom.has_class(&links[0], SHOW).unwrap());

    dom.click(&button).unwrap();
    assert!(!dom.has_class(&links[0], SHOW).unwrap());
}

#[test]
fn two_controllers_on_the_same_control_both_fire() {
    let (dom, button, links) = build_page(1);
    let first = NavToggleController::install(dom.clone(), &NavToggleConfig::default()).unwrap();
    let _second = NavToggleController::install(
        dom.clone(),
        &NavToggleConfig::default().with_class_name("expanded"),
    )
    .unwrap();

    dom.click(&button).unwrap();
    assert!(dom.has_class(&links[0], SHOW).unwrap());
    assert!(dom.has_class(&links[0], "expanded").unwrap());

    drop(first);
    dom.click(&button).unwrap();
    assert!(dom.has_class(&links[0], SHOW).unwrap());
    assert!(!dom.has_class(&links[0], "expanded").unwrap());
}
