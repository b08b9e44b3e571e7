use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, Window};
use yew::prelude::*;

/// `--vh` value for a given `window.innerHeight`: one percent of the real
/// viewport, which mobile browsers change as their chrome slides away.
pub fn vh_value(inner_height: f64) -> String {
    format!("{}px", inner_height * 0.01)
}

/// The bits of the page root the viewport setup touches.
pub trait ViewportHost {
    fn scroll_behavior(&self) -> String;
    fn set_scroll_behavior(&self, value: &str);
    fn inner_height(&self) -> f64;
    fn set_vh(&self, value: &str);
    fn listen_resize(&mut self);
    fn unlisten_resize(&mut self);
}

/// Smooth scrolling plus a live `--vh` variable for as long as the guard
/// lives. Dropping it puts the page back the way it was.
pub struct ViewportGuard<H: ViewportHost> {
    host: H,
    prior_scroll_behavior: String,
}

impl<H: ViewportHost> ViewportGuard<H> {
    pub fn install(mut host: H) -> Self {
        let prior_scroll_behavior = host.scroll_behavior();
        host.set_scroll_behavior("smooth");
        host.set_vh(&vh_value(host.inner_height()));
        host.listen_resize();
        Self {
            host,
            prior_scroll_behavior,
        }
    }
}

impl<H: ViewportHost> Drop for ViewportGuard<H> {
    fn drop(&mut self) {
        self.host.set_scroll_behavior(&self.prior_scroll_behavior);
        self.host.unlisten_resize();
    }
}

pub struct DomViewport {
    window: Window,
    root: HtmlElement,
    on_resize: Option<Closure<dyn FnMut()>>,
}

impl DomViewport {
    pub fn new() -> Option<Self> {
        let window = window()?;
        let root = window
            .document()?
            .document_element()?
            .dyn_into::<HtmlElement>()
            .ok()?;
        Some(Self {
            window,
            root,
            on_resize: None,
        })
    }
}

fn write_vh(window: &Window, root: &HtmlElement) {
    let height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let _ = root.style().set_property("--vh", &vh_value(height));
}

impl ViewportHost for DomViewport {
    fn scroll_behavior(&self) -> String {
        self.root
            .style()
            .get_property_value("scroll-behavior")
            .unwrap_or_default()
    }

    fn set_scroll_behavior(&self, value: &str) {
        let _ = self.root.style().set_property("scroll-behavior", value);
    }

    fn inner_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0)
    }

    fn set_vh(&self, value: &str) {
        let _ = self.root.style().set_property("--vh", value);
    }

    fn listen_resize(&mut self) {
        if self.on_resize.is_some() {
            return;
        }
        let window = self.window.clone();
        let root = self.root.clone();
        let on_resize = Closure::wrap(Box::new(move || {
            write_vh(&window, &root);
        }) as Box<dyn FnMut()>);

        if let Err(err) = self
            .window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
        {
            warn!("Failed to attach resize listener: {:?}", err);
            return;
        }
        self.on_resize = Some(on_resize);
    }

    fn unlisten_resize(&mut self) {
        if let Some(on_resize) = self.on_resize.take() {
            let _ = self
                .window
                .remove_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
        }
    }
}

/// Installs the viewport setup for the lifetime of the calling component.
#[hook]
pub fn use_viewport_setup() {
    use_effect_with_deps(
        move |_| {
            let guard = DomViewport::new().map(ViewportGuard::install);
            if guard.is_some() {
                debug!("Viewport setup installed");
            } else {
                warn!("No document root, skipping viewport setup");
            }
            move || drop(guard)
        },
        (),
    );
}
