use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;

/// One-way visibility flag: stays hidden until the first intersection,
/// then stays visible for the rest of the element's life.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct RevealLatch {
    visible: bool,
}

impl RevealLatch {
    pub fn observe(self, intersecting: bool) -> Self {
        Self {
            visible: self.visible || intersecting,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

pub fn reveal_class(visible: bool) -> &'static str {
    if visible {
        "reveal-visible"
    } else {
        "reveal-hidden"
    }
}

pub fn transition_delay_style(delay_ms: u32) -> String {
    format!("transition-delay: {}ms;", delay_ms)
}

// Disconnects on drop, so the observer never outlives the wrapper.
struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    fn watch(
        target: &Element,
        threshold: f64,
        on_visible: impl Fn() + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let intersecting = entries.iter().any(|entry| {
                entry
                    .dyn_into::<IntersectionObserverEntry>()
                    .map(|entry| entry.is_intersecting())
                    .unwrap_or(false)
            });
            if intersecting {
                on_visible();
                // One-shot: nothing left to watch for
                observer.disconnect();
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let mut options = IntersectionObserverInit::new();
        options.threshold(&JsValue::from_f64(threshold));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(target);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// Transition delay in milliseconds.
    #[prop_or_default]
    pub delay: u32,
    #[prop_or(config::REVEAL_THRESHOLD)]
    pub threshold: f64,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let latch = use_state(RevealLatch::default);

    {
        let node = node.clone();
        let latch = latch.clone();
        let deps = (props.threshold, latch.is_visible());
        use_effect_with_deps(
            move |(threshold, visible): &(f64, bool)| {
                let mut observer = None;
                if !*visible {
                    if let Some(element) = node.cast::<Element>() {
                        let on_visible = {
                            let latch = latch.clone();
                            move || {
                                debug!("Revealing element");
                                latch.set((*latch).observe(true));
                            }
                        };
                        match RevealObserver::watch(&element, *threshold, on_visible) {
                            Ok(watching) => observer = Some(watching),
                            Err(err) => {
                                // Without an observer there is nothing to wait for
                                warn!("IntersectionObserver unavailable, showing content: {:?}", err);
                                latch.set((*latch).observe(true));
                            }
                        }
                    }
                }

                move || drop(observer)
            },
            deps,
        );
    }

    html! {
        <div
            ref={node}
            class={classes!(props.class.clone(), "reveal", reveal_class(latch.is_visible()))}
            style={transition_delay_style(props.delay)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_until_first_intersection() {
        let latch = RevealLatch::default();
        assert!(!latch.is_visible());
        let latch = latch.observe(false).observe(false);
        assert!(!latch.is_visible());
        assert!(latch.observe(true).is_visible());
    }

    #[test]
    fn never_hides_again() {
        let mut latch = RevealLatch::default().observe(true);
        for intersecting in [false, true, false, false] {
            latch = latch.observe(intersecting);
            assert!(latch.is_visible());
        }
    }

    #[test]
    fn class_tracks_visibility() {
        assert_eq!(reveal_class(false), "reveal-hidden");
        assert_eq!(reveal_class(true), "reveal-visible");
    }

    #[test]
    fn delay_becomes_inline_style() {
        assert_eq!(transition_delay_style(0), "transition-delay: 0ms;");
        assert_eq!(transition_delay_style(220), "transition-delay: 220ms;");
    }
}
