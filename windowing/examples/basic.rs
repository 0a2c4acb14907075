// Example: minimal usage and scroll-to helper.
use windowing::{Align, WindowOptions, WindowedList};

fn main() {
    let items: Vec<u64> = (0..1_000_000).collect();
    let mut list = WindowedList::new(items, WindowOptions::new(600, 100), |v, i| {
        format!("row {i}: {v}")
    })
    .expect("valid options");

    list.tracker_mut().on_scroll(123_456);
    let out = list.view();
    println!("spacer_height={}", out.spacer_height);
    println!("range={:?}", out.range);
    println!("first_node={:?}", out.nodes.first());

    let off = list.scroll_to_index_offset(999_999, Align::End);
    list.tracker_mut().on_scroll(off);
    println!("after scroll_to_index: offset={}", list.scroll_offset());
    println!("last_node={:?}", list.view().nodes.last());
}
