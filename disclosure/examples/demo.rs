use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};

use disclosure::{
    find_element, handle_event, Disclosure, DisclosureConfig, Element, Event, FocusState, Key,
    Locale,
};

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut root = page();

    let config = DisclosureConfig::new()
        .locale(Locale::En)
        .animate_max_height(true);
    let mut session = Disclosure::new();
    session.enhance(&mut root, &config);

    println!("--- after enhancement ---");
    print_state(&root);

    // Tab to the first button and activate it with Enter
    let mut focus = FocusState::new();
    if let Some(button) = focus.focus_next(&root) {
        handle_event(&mut root, &Event::key(&button, Key::Enter));
    }

    println!("--- after keyboard toggle ---");
    print_state(&root);

    // Click the second disclosure's button open, then closed again
    handle_event(&mut root, &Event::click("disclosure-0__teaser-1"));
    handle_event(&mut root, &Event::click("disclosure-0__teaser-1"));

    println!("--- after click toggle pair ---");
    print_state(&root);

    Ok(())
}

fn page() -> Element {
    Element::div()
        .id("page")
        .child(article(
            "intro",
            "How disclosures work",
            "A disclosure pairs a toggle button with a content panel. \
             The button reflects its state through aria-expanded, the \
             panel through aria-hidden.",
        ))
        .child(
            article(
                "details",
                "Custom labels",
                "This one overrides the batch labels through data attributes.",
            )
            .attr("data-text-disclose", "tell me more")
            .attr("data-text-hide", "enough"),
        )
}

fn article(id: &str, teaser: &str, body: &str) -> Element {
    Element::div()
        .id(id)
        .class("js-disclosure")
        .child(
            Element::text(teaser)
                .id(format!("{id}-teaser"))
                .class("js-disclosure__teaser"),
        )
        .child(
            Element::text(body)
                .id(format!("{id}-panel"))
                .class("js-disclosure__panel")
                .width(40),
        )
}

fn print_state(root: &Element) {
    for index in 0..2 {
        let button_id = format!("disclosure-0__teaser-{index}");
        let panel_id = format!("disclosure-0__panel-{index}");
        let (Some(button), Some(panel)) =
            (find_element(root, &button_id), find_element(root, &panel_id))
        else {
            continue;
        };
        println!(
            "{button_id}: label={:?} expanded={:?} | {panel_id}: hidden={:?} max-height={:?}",
            button.text_content(),
            button.get_attr("aria-expanded"),
            panel.get_attr("aria-hidden"),
            panel.max_height,
        );
    }
}
