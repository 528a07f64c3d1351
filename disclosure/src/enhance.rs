use crate::element::{find_element, find_element_mut, insert_before, parent_id_of, Element};
use crate::event::{Event, Key};
use crate::measure::natural_height;
use crate::selector::{query_all, query_first_mut, Selector};

/// Locale for the default button labels. Resolved through a fixed lookup
/// table at configuration time, never from ambient environment state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    De,
    En,
}

fn default_texts(locale: Locale) -> (&'static str, &'static str) {
    match locale {
        Locale::De => ("mehr lesen", "weniger lesen"),
        Locale::En => ("read more", "show less"),
    }
}

/// Configuration for one enhancement batch.
///
/// Everything is optional; the defaults match the conventional markup
/// hook classes. Per-container `data-text-disclose`, `data-text-hide` and
/// `data-button-below` attributes override the batch values for that
/// container only.
#[derive(Debug, Clone)]
pub struct DisclosureConfig {
    pub disclosure: Selector,
    pub teaser: Selector,
    pub panel: Selector,
    pub button_class: String,
    pub locale: Locale,
    pub text_disclose: Option<String>,
    pub text_hide: Option<String>,
    /// Append the button after all container content instead of inserting
    /// it immediately before the panel.
    pub button_below: bool,
    /// Precompute the panel's natural height and keep the inline
    /// max-height in sync on toggle, for a host-side transition.
    pub animate_max_height: bool,
}

impl Default for DisclosureConfig {
    fn default() -> Self {
        Self {
            disclosure: Selector::parse(".js-disclosure"),
            teaser: Selector::parse(".js-disclosure__teaser"),
            panel: Selector::parse(".js-disclosure__panel"),
            button_class: "disclosure__button".to_string(),
            locale: Locale::default(),
            text_disclose: None,
            text_hide: None,
            button_below: false,
            animate_max_height: false,
        }
    }
}

impl DisclosureConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn disclosure(mut self, selector: impl Into<Selector>) -> Self {
        self.disclosure = selector.into();
        self
    }

    pub fn teaser(mut self, selector: impl Into<Selector>) -> Self {
        self.teaser = selector.into();
        self
    }

    pub fn panel(mut self, selector: impl Into<Selector>) -> Self {
        self.panel = selector.into();
        self
    }

    pub fn button_class(mut self, class: impl Into<String>) -> Self {
        self.button_class = class.into();
        self
    }

    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn text_disclose(mut self, text: impl Into<String>) -> Self {
        self.text_disclose = Some(text.into());
        self
    }

    pub fn text_hide(mut self, text: impl Into<String>) -> Self {
        self.text_hide = Some(text.into());
        self
    }

    pub fn button_below(mut self, below: bool) -> Self {
        self.button_below = below;
        self
    }

    pub fn animate_max_height(mut self, animate: bool) -> Self {
        self.animate_max_height = animate;
        self
    }
}

/// Enhancement session. Owns the batch counter that keeps ID namespaces
/// of successive invocations disjoint.
#[derive(Debug, Default)]
pub struct Disclosure {
    batch: u64,
}

impl Disclosure {
    pub fn new() -> Self {
        Self::default()
    }

    /// The batch number the next `enhance` call will use.
    pub fn batch(&self) -> u64 {
        self.batch
    }

    /// Enhance every container under `root` matching the disclosure
    /// selector: inject a toggle button, wire the ARIA linkage between
    /// button and panel, and start out collapsed.
    ///
    /// Panics if a matched container has no panel matching the panel
    /// selector; that is malformed markup, not a runtime condition.
    pub fn enhance(&mut self, root: &mut Element, config: &DisclosureConfig) {
        let containers = query_all(root, &config.disclosure);
        log::debug!(
            "[disclosure] batch {} enhancing {} containers",
            self.batch,
            containers.len()
        );

        for (index, container_id) in containers.iter().enumerate() {
            self.enhance_one(root, config, container_id, index);
        }

        // Every invocation gets its own ID namespace
        self.batch += 1;
    }

    fn enhance_one(
        &self,
        root: &mut Element,
        config: &DisclosureConfig,
        container_id: &str,
        index: usize,
    ) {
        let button_id = format!("disclosure-{}__teaser-{}", self.batch, index);
        let panel_id = format!("disclosure-{}__panel-{}", self.batch, index);

        let Some(container) = find_element_mut(root, container_id) else {
            return;
        };

        // Per-container overrides apply to this container only
        let text_disclose = container
            .get_attr("data-text-disclose")
            .map(str::to_string)
            .or_else(|| config.text_disclose.clone())
            .unwrap_or_else(|| default_texts(config.locale).0.to_string());
        let text_hide = container
            .get_attr("data-text-hide")
            .map(str::to_string)
            .or_else(|| config.text_hide.clone())
            .unwrap_or_else(|| default_texts(config.locale).1.to_string());
        let button_below = container
            .get_attr("data-button-below")
            .map(|v| v == "true")
            .unwrap_or(config.button_below);

        {
            let Some(panel) = query_first_mut(container, &config.panel) else {
                // Malformed markup is a caller precondition violation
                panic!("disclosure container {container_id:?} has no panel matching {:?}", config.panel);
            };

            panel.id = panel_id.clone();
            panel.set_attr("aria-hidden", "true");
            panel.set_attr("aria-labelledby", button_id.clone());

            if config.animate_max_height {
                panel.max_height = Some(natural_height(panel));
            }
        }

        let mut button = Element::button(text_disclose.clone())
            .id(button_id)
            .class(config.button_class.clone())
            .attr("aria-expanded", "false")
            .attr("aria-controls", panel_id.clone())
            .attr("data-text-disclose", text_disclose)
            .attr("data-text-hide", text_hide);

        if config.animate_max_height {
            button = button.attr("data-animate", "true");
        }

        if button_below {
            let Some(container) = find_element_mut(root, container_id) else {
                return;
            };
            container.append_child(button);
        } else if !insert_before(root, &panel_id, button) {
            log::warn!("[disclosure] could not position button before panel {panel_id}");
        }
    }
}

/// Apply an activation event to the tree. A click on a disclosure button
/// (or on any of its descendants), or an unmodified Enter/Space keyed at
/// it, toggles the widget. Returns true if a toggle happened.
pub fn handle_event(root: &mut Element, event: &Event) -> bool {
    let target = match event {
        Event::Click {
            target: Some(target),
        } => target,
        Event::Key {
            target: Some(target),
            key: Key::Enter | Key::Char(' '),
            modifiers,
        } if modifiers.none() => target,
        _ => return false,
    };

    let Some(button_id) = activation_button(root, target) else {
        return false;
    };

    toggle(root, &button_id)
}

/// Resolve the button that owns an activation: the target itself if it
/// carries `aria-controls`, else its nearest enclosing element that does.
/// Clicks landing on styled children of a button resolve to the button.
fn activation_button(root: &Element, target_id: &str) -> Option<String> {
    let mut current = target_id.to_string();
    loop {
        let element = find_element(root, &current)?;
        if element.get_attr("aria-controls").is_some() {
            return Some(current);
        }
        current = parent_id_of(root, &current)?;
    }
}

/// Toggle a disclosure button, keeping `aria-expanded` on the button,
/// `aria-hidden` on the panel, the button label and (when animating) the
/// panel's inline max-height in sync. Returns true if state changed.
pub fn toggle(root: &mut Element, button_id: &str) -> bool {
    let Some(button) = find_element(root, button_id) else {
        return false;
    };
    let Some(panel_id) = button.get_attr("aria-controls").map(str::to_string) else {
        return false;
    };

    // Collapsed buttons expand, expanded buttons collapse
    let expand = button.get_attr("aria-expanded") == Some("false");
    let label = if expand {
        button.get_attr("data-text-hide").map(str::to_string)
    } else {
        button.get_attr("data-text-disclose").map(str::to_string)
    };
    let animate = button.get_attr("data-animate") == Some("true");

    let Some(panel) = find_element_mut(root, &panel_id) else {
        log::warn!("[disclosure] button {button_id} controls missing panel {panel_id}");
        return false;
    };
    panel.set_attr("aria-hidden", if expand { "false" } else { "true" });
    if animate {
        panel.max_height = Some(if expand { natural_height(panel) } else { 0 });
    }

    let Some(button) = find_element_mut(root, button_id) else {
        return false;
    };
    button.set_attr("aria-expanded", if expand { "true" } else { "false" });
    if let Some(label) = label {
        button.set_text(label);
    }

    log::debug!(
        "[disclosure] {} {button_id}",
        if expand { "expanded" } else { "collapsed" }
    );
    true
}
