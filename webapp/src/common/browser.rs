use std::{cell::RefCell, rc::Rc};

use futures::{channel::oneshot, future::try_join_all};
use tracing::{debug, error};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlImageElement, KeyboardEvent, Window};

// thin wrappers around the browser apis the pages need
//
// everything here returns anyhow::Result so that callers can decide whether a failure
// is worth showing; most of them just log

fn js_error(context: &str, value: JsValue) -> anyhow::Error {
    anyhow::Error::msg(format!("{context}: {value:?}"))
}

fn window() -> anyhow::Result<Window> {
    web_sys::window().ok_or_else(|| anyhow::Error::msg("no global window exists"))
}

pub fn reload_page() {
    let result = window().and_then(|window| {
        window
            .location()
            .reload()
            .map_err(|err| js_error("reload failed", err))
    });

    if let Err(err) = result {
        error!("{err}");
    }
}

pub fn current_url() -> String {
    window()
        .and_then(|window| {
            window
                .location()
                .href()
                .map_err(|err| js_error("no location", err))
        })
        .unwrap_or_default()
}

pub async fn write_clipboard(text: &str) -> anyhow::Result<()> {
    let promise = window()?.navigator().clipboard().write_text(text);

    JsFuture::from(promise)
        .await
        .map_err(|err| js_error("clipboard write rejected", err))?;

    Ok(())
}

// image preloading
//
// each image gets its own element; the onload/onerror closures must outlive the load,
// so they are held here until the oneshot fires and then detached
async fn load_image(url: String) -> anyhow::Result<()> {
    let image = HtmlImageElement::new().map_err(|err| js_error("no image element", err))?;
    let (tx, rx) = oneshot::channel::<bool>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let onload = Closure::<dyn FnMut()>::new({
        let tx = tx.clone();
        move || {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(true);
            }
        }
    });
    let onerror = Closure::<dyn FnMut()>::new(move || {
        if let Some(tx) = tx.borrow_mut().take() {
            let _ = tx.send(false);
        }
    });

    image.set_onload(Some(onload.as_ref().unchecked_ref()));
    image.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    image.set_src(&url);

    let loaded = rx.await;

    image.set_onload(None);
    image.set_onerror(None);

    match loaded {
        Ok(true) => Ok(()),
        Ok(false) => Err(anyhow::Error::msg(format!("failed to load {url}"))),
        Err(_) => Err(anyhow::Error::msg(format!("load of {url} was abandoned"))),
    }
}

// resolves once every image has loaded, or as soon as any one of them fails
pub async fn preload_images(urls: Vec<String>) -> anyhow::Result<()> {
    debug!(count = urls.len(), "preloading images");

    try_join_all(urls.into_iter().map(load_image)).await?;

    Ok(())
}

// document-level keydown listener
//
// the listener is removed when this is dropped, so holding it in a hook ties it to the
// lifetime of the component that created it
pub struct KeyListener {
    closure: Closure<dyn FnMut(KeyboardEvent)>,
}

impl KeyListener {
    pub fn new(handler: impl FnMut(KeyboardEvent) + 'static) -> anyhow::Result<Self> {
        let document = window()?
            .document()
            .ok_or_else(|| anyhow::Error::msg("no document"))?;

        let closure = Closure::<dyn FnMut(KeyboardEvent)>::new(handler);

        document
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
            .map_err(|err| js_error("failed to add keydown listener", err))?;

        Ok(KeyListener { closure })
    }
}

impl Drop for KeyListener {
    fn drop(&mut self) {
        let document = web_sys::window().and_then(|window| window.document());

        if let Some(document) = document {
            let _ = document.remove_event_listener_with_callback(
                "keydown",
                self.closure.as_ref().unchecked_ref(),
            );
        }
    }
}
