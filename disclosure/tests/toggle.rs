use disclosure::{
    find_element, find_element_mut, handle_event, Disclosure, DisclosureConfig, Element, Event,
    Key, Modifiers,
};

const BUTTON: &str = "disclosure-0__teaser-0";
const PANEL: &str = "disclosure-0__panel-0";

fn enhanced_root(config: &DisclosureConfig) -> Element {
    let mut root = Element::div().child(
        Element::div()
            .id("a")
            .class("js-disclosure")
            .child(Element::text("Teaser").class("js-disclosure__teaser"))
            .child(
                Element::div()
                    .id("a-panel")
                    .class("js-disclosure__panel")
                    .height(200)
                    .child(Element::text("Long panel text")),
            ),
    );
    Disclosure::new().enhance(&mut root, config);
    root
}

fn state(root: &Element) -> (String, String, Option<String>) {
    let button = find_element(root, BUTTON).unwrap();
    let panel = find_element(root, PANEL).unwrap();
    (
        button.get_attr("aria-expanded").unwrap().to_string(),
        panel.get_attr("aria-hidden").unwrap().to_string(),
        button.text_content().map(str::to_string),
    )
}

// ============================================================================
// Click activation
// ============================================================================

#[test]
fn test_click_expands() {
    let mut root = enhanced_root(&DisclosureConfig::default());

    assert!(handle_event(&mut root, &Event::click(BUTTON)));

    let (expanded, hidden, label) = state(&root);
    assert_eq!(expanded, "true");
    assert_eq!(hidden, "false");
    assert_eq!(label.as_deref(), Some("weniger lesen"));
}

#[test]
fn test_double_toggle_returns_to_initial() {
    let mut root = enhanced_root(&DisclosureConfig::default());
    let initial = state(&root);

    assert!(handle_event(&mut root, &Event::click(BUTTON)));
    assert!(handle_event(&mut root, &Event::click(BUTTON)));

    assert_eq!(state(&root), initial);
}

#[test]
fn test_attributes_never_contradict() {
    let mut root = enhanced_root(&DisclosureConfig::default());

    for _ in 0..5 {
        let (expanded, hidden, _) = state(&root);
        assert_ne!(expanded, hidden);
        handle_event(&mut root, &Event::click(BUTTON));
    }
}

#[test]
fn test_click_on_button_descendant_toggles() {
    let mut root = enhanced_root(&DisclosureConfig::default());

    // Style the button with a child node, as a host theme might
    let button = find_element_mut(&mut root, BUTTON).unwrap();
    button.append_child(Element::text("▸").id("chevron"));

    assert!(handle_event(&mut root, &Event::click("chevron")));
    let panel = find_element(&root, PANEL).unwrap();
    assert_eq!(panel.get_attr("aria-hidden"), Some("false"));
}

#[test]
fn test_click_outside_button_is_ignored() {
    let mut root = enhanced_root(&DisclosureConfig::default());
    let initial = state(&root);

    assert!(!handle_event(&mut root, &Event::click("a")));
    assert!(!handle_event(&mut root, &Event::click("nonexistent")));
    assert!(!handle_event(&mut root, &Event::Click { target: None }));

    assert_eq!(state(&root), initial);
}

// ============================================================================
// Keyboard activation
// ============================================================================

#[test]
fn test_enter_and_space_activate() {
    let mut root = enhanced_root(&DisclosureConfig::default());

    assert!(handle_event(&mut root, &Event::key(BUTTON, Key::Enter)));
    let panel = find_element(&root, PANEL).unwrap();
    assert_eq!(panel.get_attr("aria-hidden"), Some("false"));

    assert!(handle_event(&mut root, &Event::key(BUTTON, Key::Char(' '))));
    let panel = find_element(&root, PANEL).unwrap();
    assert_eq!(panel.get_attr("aria-hidden"), Some("true"));
}

#[test]
fn test_modified_or_other_keys_do_not_activate() {
    let mut root = enhanced_root(&DisclosureConfig::default());

    assert!(!handle_event(&mut root, &Event::key(BUTTON, Key::Escape)));
    assert!(!handle_event(&mut root, &Event::key(BUTTON, Key::Char('x'))));
    assert!(!handle_event(
        &mut root,
        &Event::Key {
            target: Some(BUTTON.to_string()),
            key: Key::Enter,
            modifiers: Modifiers::ctrl(),
        }
    ));

    let button = find_element(&root, BUTTON).unwrap();
    assert_eq!(button.get_attr("aria-expanded"), Some("false"));
}

// ============================================================================
// max-height animation
// ============================================================================

#[test]
fn test_toggle_tracks_max_height() {
    let config = DisclosureConfig::new().animate_max_height(true);
    let mut root = enhanced_root(&config);

    // Measured at enhancement time while still collapsed
    let panel = find_element(&root, PANEL).unwrap();
    assert_eq!(panel.max_height, Some(200));

    // Expand: max-height is the measured natural height
    handle_event(&mut root, &Event::click(BUTTON));
    let panel = find_element(&root, PANEL).unwrap();
    assert_eq!(panel.max_height, Some(200));

    // Collapse: max-height drops to 0
    handle_event(&mut root, &Event::click(BUTTON));
    let panel = find_element(&root, PANEL).unwrap();
    assert_eq!(panel.max_height, Some(0));

    // Expand again: back to the measured value
    handle_event(&mut root, &Event::click(BUTTON));
    let panel = find_element(&root, PANEL).unwrap();
    assert_eq!(panel.max_height, Some(200));
}

#[test]
fn test_toggle_without_animation_never_touches_max_height() {
    let mut root = enhanced_root(&DisclosureConfig::default());

    handle_event(&mut root, &Event::click(BUTTON));
    handle_event(&mut root, &Event::click(BUTTON));

    let panel = find_element(&root, PANEL).unwrap();
    assert_eq!(panel.max_height, None);
}

// ============================================================================
// Per-container texts at toggle time
// ============================================================================

#[test]
fn test_toggle_uses_container_override_texts() {
    let mut root = Element::div().child(
        Element::div()
            .class("js-disclosure")
            .attr("data-text-disclose", "open it")
            .attr("data-text-hide", "close it")
            .child(Element::text("T").class("js-disclosure__teaser"))
            .child(Element::text("P").class("js-disclosure__panel")),
    );
    Disclosure::new().enhance(&mut root, &DisclosureConfig::default());

    handle_event(&mut root, &Event::click(BUTTON));
    let button = find_element(&root, BUTTON).unwrap();
    assert_eq!(button.text_content(), Some("close it"));

    handle_event(&mut root, &Event::click(BUTTON));
    let button = find_element(&root, BUTTON).unwrap();
    assert_eq!(button.text_content(), Some("open it"));
}
