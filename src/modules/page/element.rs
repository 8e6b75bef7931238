use std::sync::{Arc, Mutex, PoisonError, RwLock};

use futures::future::BoxFuture;
use tokio::task::JoinHandle;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    pub text: String,
}

impl Element {
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Clone, Debug, Default)]
pub struct TextInput {
    value: Arc<RwLock<String>>,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> String {
        self.value
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set_value(&self, value: impl Into<String>) {
        *self.value.write().unwrap_or_else(PoisonError::into_inner) = value.into();
    }
}

// runs synchronously on click, the returned future is scheduled as a task
pub trait ClickListener: Send + Sync + 'static {
    fn on_click(&self) -> BoxFuture<'static, ()>;
}

struct Listener(pub Arc<dyn ClickListener>);

#[derive(Clone, Default)]
pub struct Button {
    listeners: Arc<Mutex<Vec<Listener>>>,
}

impl Button {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_listener(&self, f: impl ClickListener) {
        self.add_shared_listener(Arc::new(f));
    }

    pub fn add_shared_listener(&self, f: Arc<dyn ClickListener>) {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Listener(f));
    }

    /// Notifies every listener and returns without waiting for the work they scheduled.
    pub fn click(&self) -> Vec<JoinHandle<()>> {
        let listeners: Vec<Arc<dyn ClickListener>> = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|l| l.0.clone())
            .collect();

        listeners
            .into_iter()
            .map(|listener| tokio::spawn(listener.on_click()))
            .collect()
    }
}

pub trait DisplayRegion: Send + Sync + 'static {
    fn clear(&self);
    fn append_child(&self, element: Element);
    fn children(&self) -> Vec<Element>;

    fn replace_children(&self, elements: Vec<Element>) {
        self.clear();
        for element in elements {
            self.append_child(element);
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Container {
    children: Arc<Mutex<Vec<Element>>>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texts(&self) -> Vec<String> {
        self.children().into_iter().map(|e| e.text).collect()
    }
}

impl DisplayRegion for Container {
    fn clear(&self) {
        self.children
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn append_child(&self, element: Element) {
        self.children
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(element);
    }

    fn children(&self) -> Vec<Element> {
        self.children
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    // one lock for the whole swap
    fn replace_children(&self, elements: Vec<Element>) {
        *self.children.lock().unwrap_or_else(PoisonError::into_inner) = elements;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Counter(Arc<AtomicUsize>);

    impl ClickListener for Counter {
        fn on_click(&self) -> BoxFuture<'static, ()> {
            let count = self.0.clone();
            Box::pin(async move {
                count.fetch_add(1, Ordering::SeqCst);
            })
        }
    }

    #[tokio::test]
    async fn click_runs_every_listener() {
        let count = Arc::new(AtomicUsize::new(0));
        let button = Button::new();
        button.add_listener(Counter(count.clone()));
        button.add_listener(Counter(count.clone()));

        for handle in button.click() {
            handle.await.unwrap();
        }

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn replace_discards_previous_children() {
        let container = Container::new();
        container.append_child(Element::text("old"));

        container.replace_children(vec![Element::text("a"), Element::text("b")]);

        assert_eq!(container.texts(), vec!["a", "b"]);
    }
}
