// Example: a host scroll element driving a windowed list through a scoped subscription.
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use windowing::{ListenerId, ScrollContainer, WindowOptions, WindowedList};

struct Element {
    offset: Cell<u64>,
    viewport: Cell<u32>,
    content: u64,
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(ListenerId, Rc<dyn Fn()>)>>,
}

impl Element {
    fn scroll_to(&self, offset: u64) {
        self.offset.set(offset.min(self.max_scroll_offset()));
        let listeners: Vec<_> = self.listeners.borrow().iter().map(|(_, l)| Rc::clone(l)).collect();
        for l in listeners {
            l();
        }
    }
}

impl ScrollContainer for Element {
    fn scroll_offset(&self) -> u64 {
        self.offset.get()
    }

    fn viewport_height(&self) -> u32 {
        self.viewport.get()
    }

    fn max_scroll_offset(&self) -> u64 {
        self.content.saturating_sub(self.viewport.get() as u64)
    }

    fn add_scroll_listener(&self, listener: Rc<dyn Fn()>) -> ListenerId {
        let id = ListenerId(self.next_id.replace(self.next_id.get() + 1));
        self.listeners.borrow_mut().push((id, listener));
        id
    }

    fn remove_scroll_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(i, _)| *i != id);
        before != listeners.len()
    }
}

fn main() {
    let names: Vec<String> = (0..10_000).map(|i| format!("item-{i}")).collect();
    let mut list = WindowedList::new(names, WindowOptions::new(300, 30).with_overscan(2), |s, _| {
        s.clone()
    })
    .expect("valid options");

    let element = Rc::new(Element {
        offset: Cell::new(0),
        viewport: Cell::new(300),
        content: list.total_height(),
        next_id: Cell::new(1),
        listeners: RefCell::new(Vec::new()),
    });
    list.attach(&element);

    for target in [0, 900, 45_000, u64::MAX] {
        element.scroll_to(target);
        let out = list.view();
        println!(
            "offset={} range={:?} nodes={}",
            list.scroll_offset(),
            out.range,
            out.nodes.len()
        );
    }

    drop(list);
    println!("listeners after unmount={}", element.listeners.borrow().len());
}
