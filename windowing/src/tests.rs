use crate::*;

use alloc::format;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use core::num::NonZeroU32;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        let span = end_exclusive - start;
        start + (self.next_u64() % span)
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        self.gen_range_u64(start as u64, end_exclusive as u64) as usize
    }

    fn gen_range_u32(&mut self, start: u32, end_exclusive: u32) -> u32 {
        self.gen_range_u64(start as u64, end_exclusive as u64) as u32
    }
}

/// A minimal host scroll element: clamps like a native container and notifies listeners.
struct TestContainer {
    offset: Cell<u64>,
    viewport: Cell<u32>,
    content: Cell<u64>,
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(ListenerId, Rc<dyn Fn()>)>>,
}

impl TestContainer {
    fn new(viewport: u32, content: u64) -> Rc<Self> {
        Rc::new(Self {
            offset: Cell::new(0),
            viewport: Cell::new(viewport),
            content: Cell::new(content),
            next_id: Cell::new(1),
            listeners: RefCell::new(Vec::new()),
        })
    }

    fn scroll_to(&self, offset: u64) {
        self.offset.set(offset.min(self.max_scroll_offset()));
        self.dispatch();
    }

    fn resize(&self, viewport: u32) {
        self.viewport.set(viewport);
        self.offset.set(self.offset.get().min(self.max_scroll_offset()));
        self.dispatch();
    }

    fn dispatch(&self) {
        let listeners: Vec<Rc<dyn Fn()>> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        for l in listeners {
            l();
        }
    }

    fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl ScrollContainer for TestContainer {
    fn scroll_offset(&self) -> u64 {
        self.offset.get()
    }

    fn viewport_height(&self) -> u32 {
        self.viewport.get()
    }

    fn max_scroll_offset(&self) -> u64 {
        self.content
            .get()
            .saturating_sub(self.viewport.get() as u64)
    }

    fn add_scroll_listener(&self, listener: Rc<dyn Fn()>) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, listener));
        id
    }

    fn remove_scroll_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(i, _)| *i != id);
        listeners.len() != before
    }
}

fn params(scroll_offset: u64, viewport: u32, item_height: u32, count: usize) -> WindowParams {
    WindowParams::new(scroll_offset, viewport, item_height, count, DEFAULT_OVERSCAN).unwrap()
}

fn bounds(r: VisibleRange) -> (usize, usize) {
    (r.start_index().unwrap(), r.end_index().unwrap())
}

#[test]
fn mid_list_scroll_selects_overscanned_window() {
    let r = window_range(&params(1000, 600, 100, 1000));
    assert_eq!(bounds(r), (5, 21));
    assert_eq!(r.len(), 17);
}

#[test]
fn top_of_list_starts_at_zero() {
    let r = window_range(&params(0, 600, 100, 1000));
    assert_eq!(bounds(r), (0, 11));
}

#[test]
fn viewport_shrink_only_moves_end_index() {
    let p = params(1000, 600, 100, 1000);
    assert_eq!(bounds(p.range()), (5, 21));

    let shrunk = p.with_viewport_height(300);
    assert_eq!(bounds(shrunk.range()), (5, 18));
}

#[test]
fn bottom_of_list_reaches_last_index() {
    let p = params(0, 600, 100, 1000);
    let bottom = p.with_scroll_offset(p.max_scroll_offset());
    assert_eq!(p.max_scroll_offset(), 99_400);
    assert_eq!(bottom.range().end_index(), Some(999));
}

#[test]
fn empty_collection_yields_empty_range() {
    let r = window_range(&params(0, 600, 100, 0));
    assert!(r.is_empty());
    assert_eq!(r.len(), 0);
    assert_eq!(r.start_index(), None);
    assert_eq!(r.iter().count(), 0);
}

#[test]
fn offset_past_content_keeps_start_before_end() {
    let r = window_range(&params(1_000_000, 600, 100, 10));
    assert_eq!(bounds(r), (9, 9));

    let r = window_range(&params(u64::MAX, u32::MAX, 1, 3));
    assert_eq!(bounds(r), (2, 2));
}

#[test]
fn short_list_fits_entirely() {
    let r = window_range(&params(0, 600, 100, 3));
    assert_eq!(bounds(r), (0, 2));
}

#[test]
fn zero_overscan_covers_exactly_intersecting_rows() {
    let p = WindowParams::new(150, 200, 100, 100, 0).unwrap();
    // band [150, 350) intersects rows 1, 2, 3
    assert_eq!(bounds(p.range()), (1, 3));
}

#[test]
fn zero_item_height_is_rejected() {
    assert_eq!(
        WindowParams::new(0, 600, 0, 10, 5),
        Err(ConfigError::ZeroItemHeight)
    );
    assert_eq!(
        WindowOptions::new(600, 0).validate(),
        Err(ConfigError::ZeroItemHeight)
    );
    let list = WindowedList::new(Vec::<u32>::new(), WindowOptions::new(600, 0), |x, _| *x);
    assert_eq!(list.err(), Some(ConfigError::ZeroItemHeight));
}

#[test]
fn config_error_message_is_readable() {
    assert_eq!(
        format!("{}", ConfigError::ZeroItemHeight),
        "item height must be greater than zero"
    );
}

#[test]
fn calculation_is_idempotent() {
    let p = params(4321, 555, 37, 777);
    assert_eq!(window_range(&p), window_range(&p));
}

#[test]
fn index_at_offset_clamps_to_last_row() {
    let p = params(0, 600, 100, 10);
    assert_eq!(p.index_at_offset(0), Some(0));
    assert_eq!(p.index_at_offset(99), Some(0));
    assert_eq!(p.index_at_offset(100), Some(1));
    assert_eq!(p.index_at_offset(50_000), Some(9));
    assert_eq!(params(0, 600, 100, 0).index_at_offset(0), None);
}

#[test]
fn item_layout_is_uniform() {
    let p = params(0, 600, 100, 10);
    let it = p.item(3).unwrap();
    assert_eq!(it.top, 300);
    assert_eq!(it.end(), 400);
    assert_eq!(p.item(10), None);
}

#[test]
fn scroll_to_index_offset_aligns_and_clamps() {
    let p = params(1000, 600, 100, 1000);
    assert_eq!(p.scroll_to_index_offset(50, Align::Start), 5000);
    assert_eq!(p.scroll_to_index_offset(50, Align::End), 4500);
    assert_eq!(p.scroll_to_index_offset(50, Align::Center), 4750);
    // Fully visible: stays put.
    assert_eq!(p.scroll_to_index_offset(12, Align::Auto), 1000);
    // Above the viewport: aligns to start.
    assert_eq!(p.scroll_to_index_offset(2, Align::Auto), 200);
    // Below the viewport: aligns to end.
    assert_eq!(p.scroll_to_index_offset(20, Align::Auto), 1500);
    // Past the end: clamped to the last row and the max offset.
    assert_eq!(p.scroll_to_index_offset(5000, Align::Start), 99_400);
    assert_eq!(params(0, 600, 100, 0).scroll_to_index_offset(3, Align::Start), 0);
}

#[test]
fn visible_range_iterates_inclusively() {
    let r = VisibleRange::new(3, 6);
    let v: Vec<usize> = r.into_iter().collect();
    assert_eq!(v, alloc::vec![3, 4, 5, 6]);
    assert_eq!(r.as_exclusive(), 3..7);
    assert!(r.contains(3));
    assert!(r.contains(6));
    assert!(!r.contains(7));
    assert_eq!(VisibleRange::EMPTY.as_exclusive(), 0..0);
}

#[test]
fn visible_range_rejects_inverted_bounds() {
    assert_eq!(
        VisibleRange::try_from(Some((7usize, 3usize))),
        Err(InvertedRange { start: 7, end: 3 })
    );
    assert_eq!(VisibleRange::try_from(Some((4usize, 4usize))), Ok(VisibleRange::new(4, 4)));
    assert_eq!(VisibleRange::try_from(None::<(usize, usize)>), Ok(VisibleRange::EMPTY));
    assert_eq!(Option::<(usize, usize)>::from(VisibleRange::new(2, 9)), Some((2, 9)));
}

#[cfg(feature = "serde")]
#[test]
fn visible_range_serde_keeps_ordering() {
    let json = serde_json::to_string(&VisibleRange::new(3, 7)).unwrap();
    assert_eq!(json, "[3,7]");
    assert_eq!(
        serde_json::from_str::<VisibleRange>(&json).unwrap(),
        VisibleRange::new(3, 7)
    );
    assert_eq!(
        serde_json::from_str::<VisibleRange>("null").unwrap(),
        VisibleRange::EMPTY
    );

    let err = serde_json::from_str::<VisibleRange>("[7,3]").unwrap_err();
    assert!(err.to_string().contains("past its end"));
}

#[test]
fn renderer_positions_rows_by_absolute_index() {
    let items: Vec<u32> = (0..100).collect();
    let renderer = WindowRenderer::new(NonZeroU32::new(10).unwrap())
        .with_class_name(Some(String::from("rows")));
    let out = renderer.render(&items, VisibleRange::new(40, 42), 30, |v, i| {
        assert_eq!(*v as usize, i);
        format!("row {i}")
    });

    assert_eq!(out.spacer_height, 1000);
    assert_eq!(out.viewport_height, 30);
    assert_eq!(out.class_name.as_deref(), Some("rows"));
    assert_eq!(out.keys().collect::<Vec<_>>(), alloc::vec![40, 41, 42]);
    assert_eq!(out.nodes[0].top, 400);
    assert_eq!(out.nodes[2].top, 420);
    assert!(out.nodes.iter().all(|n| n.height == 10));
    assert_eq!(out.nodes[1].content, "row 41");
}

#[test]
fn renderer_emits_nothing_for_empty_collection() {
    let items: Vec<u32> = Vec::new();
    let renderer = WindowRenderer::new(NonZeroU32::new(100).unwrap());
    let range = window_range(&params(0, 600, 100, items.len()));
    let out = renderer.render(&items, range, 600, |v, _| *v);
    assert!(out.is_empty());
    assert_eq!(out.spacer_height, 0);
}

#[test]
fn renderer_clips_range_to_collection() {
    let items = [1u8, 2, 3];
    let renderer = WindowRenderer::new(NonZeroU32::new(5).unwrap());
    let mut seen = Vec::new();
    renderer.for_each_item(&items, VisibleRange::new(1, 10), |it, v| seen.push((it.index, *v)));
    assert_eq!(seen, alloc::vec![(1, 2), (2, 3)]);
}

#[test]
fn try_render_propagates_first_row_error() {
    let items: Vec<u32> = (0..20).collect();
    let renderer = WindowRenderer::new(NonZeroU32::new(1).unwrap());
    let mut calls = 0;
    let res = renderer.try_render(&items, VisibleRange::new(0, 9), 10, |v, i| {
        calls += 1;
        if i == 4 { Err(format!("bad row {v}")) } else { Ok(*v) }
    });
    assert_eq!(res.unwrap_err(), "bad row 4");
    assert_eq!(calls, 5);
}

#[test]
fn tracker_without_container_stays_at_initial_offset() {
    let mut t = ScrollTracker::new();
    t.attach_optional::<TestContainer>(None);
    assert!(!t.is_attached());
    assert_eq!(t.scroll_offset(), 0);
    assert_eq!(t.revision(), 0);
}

#[test]
fn tracker_republishes_container_scroll() {
    let c = TestContainer::new(600, 100_000);
    let mut t = ScrollTracker::new();
    t.attach(&c);
    assert!(t.is_attached());
    assert_eq!(c.listener_count(), 1);
    assert_eq!(t.viewport_height(), 600);

    c.scroll_to(1000);
    assert_eq!(t.scroll_offset(), 1000);
    c.scroll_to(1_000_000);
    assert_eq!(t.scroll_offset(), 99_400);

    c.resize(300);
    assert_eq!(t.viewport_height(), 300);
}

#[test]
fn tracker_counts_every_notification() {
    let c = TestContainer::new(600, 100_000);
    let mut t = ScrollTracker::new();
    t.attach(&c);
    let r0 = t.revision();
    c.scroll_to(10);
    c.scroll_to(10);
    c.scroll_to(11);
    assert_eq!(t.revision(), r0 + 3);
}

#[test]
fn detach_releases_listener() {
    let c = TestContainer::new(600, 100_000);
    let mut t = ScrollTracker::new();
    t.attach(&c);
    c.scroll_to(500);
    assert!(t.detach());
    assert_eq!(c.listener_count(), 0);
    assert!(!t.detach());

    c.scroll_to(2000);
    assert_eq!(t.scroll_offset(), 500);
}

#[test]
fn dropping_tracker_releases_listener() {
    let c = TestContainer::new(600, 100_000);
    {
        let mut t = ScrollTracker::new();
        t.attach(&c);
        assert_eq!(c.listener_count(), 1);
    }
    assert_eq!(c.listener_count(), 0);
}

#[test]
fn container_swap_moves_subscription() {
    let a = TestContainer::new(600, 100_000);
    let b = TestContainer::new(400, 100_000);
    let mut t = ScrollTracker::new();

    t.attach(&a);
    t.attach(&b);
    assert_eq!(a.listener_count(), 0);
    assert_eq!(b.listener_count(), 1);
    assert_eq!(t.viewport_height(), 400);

    a.scroll_to(3000);
    assert_eq!(t.scroll_offset(), 0);
    b.scroll_to(700);
    assert_eq!(t.scroll_offset(), 700);
}

#[test]
fn repeated_attach_detach_cycles_do_not_leak() {
    let c = TestContainer::new(600, 100_000);
    let mut t = ScrollTracker::new();
    for _ in 0..50 {
        t.attach(&c);
        t.attach(&c);
        t.detach();
    }
    assert_eq!(c.listener_count(), 0);
}

#[test]
fn subscription_release_is_idempotent() {
    let c = TestContainer::new(600, 100_000);
    let mut sub = ScrollSubscription::new(&c, Rc::new(|| {}));
    assert!(sub.is_active());
    assert_eq!(c.listener_count(), 1);
    sub.release();
    sub.release();
    assert!(!sub.is_active());
    drop(sub);
    assert_eq!(c.listener_count(), 0);
}

#[test]
fn subscription_outliving_container_is_harmless() {
    let c = TestContainer::new(600, 100_000);
    let mut t = ScrollTracker::new();
    t.attach(&c);
    drop(c);
    assert!(t.detach());
}

#[test]
fn on_change_receives_snapshots() {
    let c = TestContainer::new(600, 100_000);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut t = ScrollTracker::new();
    t.set_on_change(Some({
        let seen = Rc::clone(&seen);
        move |s: ScrollSnapshot| seen.borrow_mut().push(s.offset)
    }));
    t.attach(&c);
    c.scroll_to(100);
    c.scroll_to(250);
    assert_eq!(*seen.borrow(), alloc::vec![0, 100, 250]);
}

#[test]
fn min_delta_policy_keeps_boundaries() {
    let c = TestContainer::new(600, 10_000);
    let mut t = ScrollTracker::new().with_policy(ScrollPolicy::MinDelta(50));
    t.attach(&c);

    c.scroll_to(20);
    assert_eq!(t.scroll_offset(), 0);
    c.scroll_to(60);
    assert_eq!(t.scroll_offset(), 60);
    c.scroll_to(0);
    assert_eq!(t.scroll_offset(), 0);
    c.scroll_to(9_390);
    assert_eq!(t.scroll_offset(), 9_390);
    c.scroll_to(9_400);
    assert_eq!(t.scroll_offset(), 9_400);

    c.resize(300);
    assert_eq!(t.viewport_height(), 300);
}

#[test]
fn snapshot_restores_after_remount() {
    let c = TestContainer::new(600, 100_000);
    let mut t = ScrollTracker::new();
    t.attach(&c);
    c.scroll_to(4200);
    let snap = t.snapshot();
    drop(t);

    let mut t = ScrollTracker::new();
    t.restore(snap);
    assert_eq!(t.scroll_offset(), 4200);
    assert_eq!(t.viewport_height(), 600);
}

#[test]
fn manual_feed_updates_offset() {
    let mut t = ScrollTracker::new().with_viewport_height(600);
    assert!(t.on_scroll(300));
    assert_eq!(t.scroll_offset(), 300);
    t.set_viewport_height(200);
    assert_eq!(t.snapshot(), ScrollSnapshot { offset: 300, viewport_height: 200 });
}

#[test]
fn windowed_list_follows_container() {
    let items: Vec<u32> = (0..1000).collect();
    let mut list = WindowedList::new(items, WindowOptions::new(600, 100), |v, i| (*v, i)).unwrap();
    assert_eq!(list.total_height(), 100_000);

    let first = list.view();
    assert_eq!(first.range, VisibleRange::new(0, 11));
    assert_eq!(first.nodes.len(), 12);

    let c = TestContainer::new(600, list.total_height());
    list.attach(&c);
    c.scroll_to(1000);
    let out = list.view();
    assert_eq!(out.range, VisibleRange::new(5, 21));
    assert_eq!(out.nodes.first().map(|n| n.key), Some(5));
    assert_eq!(out.nodes.last().map(|n| n.content), Some((21, 21)));

    c.resize(300);
    assert_eq!(list.range(), VisibleRange::new(5, 18));
}

#[test]
fn attached_list_takes_viewport_from_container() {
    let items: Vec<u32> = (0..1000).collect();
    let mut list = WindowedList::new(items, WindowOptions::new(600, 100), |v, _| *v).unwrap();
    let c = TestContainer::new(600, list.total_height());
    list.attach(&c);

    list.set_height(300);
    assert_eq!(list.viewport_height(), 300);

    c.scroll_to(1000);
    assert_eq!(list.viewport_height(), 600);
    assert_eq!(list.range(), VisibleRange::new(5, 21));

    c.resize(300);
    list.set_height(300);
    c.scroll_to(1100);
    assert_eq!(list.viewport_height(), 300);
}

#[test]
fn windowed_list_replaces_collection() {
    let mut list = WindowedList::new(alloc::vec!["a", "b"], WindowOptions::new(10, 5), |s, _| {
        String::from(*s)
    })
    .unwrap();
    assert_eq!(list.view().nodes.len(), 2);

    list.set_items(Vec::new());
    let out = list.view();
    assert!(out.nodes.is_empty());
    assert_eq!(out.spacer_height, 0);
    assert!(out.range.is_empty());
}

#[test]
fn windowed_list_reconfiguration() {
    let mut list = WindowedList::new(
        (0..100).collect::<Vec<u32>>(),
        WindowOptions::new(100, 10)
            .with_overscan(0)
            .with_class_name("bg"),
        |v, _| *v,
    )
    .unwrap();
    assert_eq!(list.range(), VisibleRange::new(0, 10));

    assert_eq!(list.set_item_height(0), Err(ConfigError::ZeroItemHeight));
    assert_eq!(list.options().item_height, 10);

    list.set_item_height(20).unwrap();
    assert_eq!(list.range(), VisibleRange::new(0, 5));
    assert_eq!(list.view().class_name.as_deref(), Some("bg"));

    list.set_overscan(2);
    list.set_height(40);
    assert_eq!(list.range(), VisibleRange::new(0, 4));
}

#[test]
fn windowed_list_try_view_propagates_errors() {
    let mut list = WindowedList::new(
        (0..10).collect::<Vec<u32>>(),
        WindowOptions::new(100, 10),
        |v, _| if *v == 3 { Err("boom") } else { Ok(*v) },
    )
    .unwrap();
    assert_eq!(list.try_view().unwrap_err(), "boom");

    list.set_items((10..20).collect::<Vec<u32>>());
    assert_eq!(list.try_view().unwrap().nodes.len(), 10);
}

#[test]
fn initial_offset_is_used_before_first_notification() {
    let list = WindowedList::new(
        (0..1000).collect::<Vec<u32>>(),
        WindowOptions::new(600, 100).with_initial_offset(1000),
        |v, _| *v,
    )
    .unwrap();
    assert_eq!(list.range(), VisibleRange::new(5, 21));
}

#[test]
fn randomized_windows_cover_every_intersecting_row() {
    let mut rng = Lcg::new(0x5eed);
    for _ in 0..2000 {
        let count = rng.gen_range_usize(0, 300);
        let item_height = rng.gen_range_u32(1, 50);
        let viewport = rng.gen_range_u32(0, 500);
        let overscan = rng.gen_range_usize(0, 8);
        let p = WindowParams::new(0, viewport, item_height, count, overscan).unwrap();
        let offset = rng.gen_range_u64(0, p.max_scroll_offset() + 1);
        let p = p.with_scroll_offset(offset);
        let r = p.range();

        if count == 0 {
            assert!(r.is_empty());
            continue;
        }
        let (start, end) = bounds(r);
        assert!(start <= end && end < count);

        let h = item_height as u64;
        let band_end = offset + viewport as u64;
        for i in 0..count {
            let top = i as u64 * h;
            if top < band_end && top + h > offset {
                assert!(r.contains(i), "row {i} visible but outside {r:?} for {p:?}");
            }
        }
    }
}

#[test]
fn randomized_scrolls_are_monotonic() {
    let mut rng = Lcg::new(42);
    for _ in 0..500 {
        let count = rng.gen_range_usize(1, 500);
        let p = WindowParams::new(
            0,
            rng.gen_range_u32(0, 400),
            rng.gen_range_u32(1, 40),
            count,
            rng.gen_range_usize(0, 6),
        )
        .unwrap();
        let max = p.max_scroll_offset() + 100;
        let mut prev = bounds(p.range());
        let mut offset = 0;
        while offset < max {
            offset += rng.gen_range_u64(1, 64);
            let next = bounds(p.with_scroll_offset(offset).range());
            assert!(next.0 >= prev.0 && next.1 >= prev.1);
            prev = next;
        }
    }
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    fn arb_params() -> impl Strategy<Value = WindowParams> {
        (1usize..5_000, 1u32..200, 0u32..2_000, 0usize..10).prop_flat_map(
            |(count, item_height, viewport, overscan)| {
                let total = count as u64 * item_height as u64;
                let max = total.saturating_sub(viewport as u64);
                (0..=max).prop_map(move |offset| {
                    WindowParams::new(offset, viewport, item_height, count, overscan).unwrap()
                })
            },
        )
    }

    proptest! {
        #[test]
        fn range_is_well_formed(p in arb_params()) {
            let r = p.range();
            let (start, end) = bounds(r);
            prop_assert!(start <= end);
            prop_assert!(end < p.item_count);
        }

        #[test]
        fn no_visible_row_is_excluded(p in arb_params()) {
            let r = p.range();
            let h = p.item_height.get() as u64;
            let first = p.scroll_offset / h;
            let band_end = p.scroll_offset + p.viewport_height as u64;
            let mut i = first as usize;
            while i < p.item_count && (i as u64) * h < band_end {
                prop_assert!(r.contains(i));
                i += 1;
            }
        }

        #[test]
        fn end_index_is_monotonic(p in arb_params(), delta in 0u64..10_000) {
            let a = p.range();
            let b = p.with_scroll_offset(p.scroll_offset + delta).range();
            prop_assert!(a.start_index() <= b.start_index());
            prop_assert!(a.end_index() <= b.end_index());
        }

        #[test]
        fn extremes_touch_both_ends(p in arb_params()) {
            prop_assert_eq!(p.with_scroll_offset(0).range().start_index(), Some(0));
            let bottom = p.with_scroll_offset(p.max_scroll_offset());
            prop_assert_eq!(bottom.range().end_index(), Some(p.item_count - 1));
        }

        #[test]
        fn rendered_keys_match_range(p in arb_params()) {
            let items: Vec<usize> = (0..p.item_count).collect();
            let renderer = WindowRenderer::new(p.item_height);
            let out = renderer.render(&items, p.range(), p.viewport_height, |v, _| *v);
            prop_assert_eq!(out.nodes.len(), p.range().len());
            for n in &out.nodes {
                prop_assert_eq!(n.key, n.content);
                prop_assert_eq!(n.top, n.key as u64 * p.item_height.get() as u64);
            }
            prop_assert_eq!(out.spacer_height, p.total_height());
        }
    }
}
