use midi_matrix::{
    layout::{LayoutEngine, Rect},
    MAX_CHANNELS, MAX_NOTES,
};

/// How many regions cover each cell of `bounds`.
fn coverage(bounds: Rect, regions: impl IntoIterator<Item = Rect>) -> Vec<u32> {
    let mut counts = vec![0u32; bounds.area() as usize];
    for region in regions {
        for (x, y) in region.cells() {
            assert!(bounds.contains(x, y), "{region:?} leaks out of {bounds:?}");
            let (dx, dy) = ((x - bounds.x) as usize, (y - bounds.y) as usize);
            counts[dy * bounds.w as usize + dx] += 1;
        }
    }
    counts
}

fn channel_regions(engine: &LayoutEngine) -> Vec<Rect> {
    engine.seen_channels().map(|(_, c)| c.region()).collect()
}

fn all_regions(engine: &LayoutEngine) -> Vec<(usize, Rect, Vec<Rect>)> {
    engine
        .seen_channels()
        .map(|(i, c)| (i, c.region(), c.seen_notes().map(|(_, n)| n.region()).collect()))
        .collect()
}

/// Channel orders a sequencer might plausibly produce.
fn orders() -> Vec<Vec<usize>> {
    vec![
        (0..MAX_CHANNELS).collect(),
        (0..MAX_CHANNELS).rev().collect(),
        (0..MAX_CHANNELS).map(|i| i * 5 % MAX_CHANNELS).collect(),
        (0..MAX_CHANNELS).map(|i| (i * 7 + 3) % MAX_CHANNELS).collect(),
    ]
}

#[test]
fn channels_partition_the_matrix_after_every_registration() {
    for (width, height) in [(32, 16), (16, 16), (8, 32), (7, 5)] {
        for order in orders() {
            let mut engine = LayoutEngine::new(width, height);
            for channel in order {
                engine.register_channel(channel);
                let counts = coverage(engine.bounds(), channel_regions(&engine));
                assert!(
                    counts.iter().all(|&c| c == 1),
                    "{width}x{height} not partitioned after channel {channel}"
                );
            }
            assert_eq!(engine.seen_channel_count(), MAX_CHANNELS);
        }
    }
}

#[test]
fn regions_follow_ascending_channel_order() {
    // Registration order doesn't matter, only which channels are seen
    let mut forward = LayoutEngine::default();
    let mut backward = LayoutEngine::default();
    for channel in [1, 4, 9] {
        forward.register_channel(channel);
    }
    for channel in [9, 4, 1] {
        backward.register_channel(channel);
    }

    assert_eq!(channel_regions(&forward), channel_regions(&backward));
    assert_eq!(
        channel_regions(&forward),
        vec![
            Rect::new(0, 0, 10, 16),
            Rect::new(10, 0, 11, 16),
            Rect::new(21, 0, 11, 16),
        ]
    );
}

#[test]
fn power_of_two_channel_counts_split_evenly() {
    for n in [1usize, 2, 4, 8, 16] {
        let mut engine = LayoutEngine::new(32, 16);
        for channel in 0..n {
            engine.register_channel(channel);
        }
        let expected = 512 / n as u32;
        assert!(channel_regions(&engine).iter().all(|r| r.area() == expected));
    }
}

#[test]
fn every_channel_gets_cells_on_the_default_matrix() {
    let mut engine = LayoutEngine::default();
    for channel in 0..MAX_CHANNELS {
        engine.register_channel(channel);
        assert!(channel_regions(&engine).iter().all(|r| !r.is_empty()));
    }
}

#[test]
fn notes_partition_their_channel() {
    let mut engine = LayoutEngine::default();
    for channel in [0, 5, 11] {
        engine.register_channel(channel);
    }
    for (channel, note) in [(0, 60), (0, 64), (0, 67), (5, 36), (11, 0), (11, 127), (11, 64)] {
        engine.register_note(channel, note);
    }
    // A late channel re-tiles everything, notes included
    engine.register_channel(2);

    for (index, region, notes) in all_regions(&engine) {
        if notes.is_empty() {
            continue;
        }
        let counts = coverage(region, notes);
        assert!(counts.iter().all(|&c| c == 1), "channel {index}");
    }
}

#[test]
fn register_channel_is_idempotent() {
    let mut once = LayoutEngine::default();
    let mut twice = LayoutEngine::default();
    for channel in [3, 0, 15] {
        once.register_channel(channel);
        twice.register_channel(channel);
        assert!(!twice.register_channel(channel));
    }
    assert_eq!(once, twice);
}

#[test]
fn out_of_range_indices_are_no_ops() {
    let fresh = LayoutEngine::default();
    let mut engine = LayoutEngine::default();

    assert!(!engine.register_channel(MAX_CHANNELS));
    assert!(!engine.register_note(MAX_CHANNELS, 0));
    assert!(!engine.register_note(0, MAX_NOTES));
    engine.set_active(MAX_CHANNELS, 0, true);
    engine.set_active(0, MAX_NOTES, true);

    assert_eq!(engine, fresh);
}

#[test]
fn set_active_never_moves_regions() {
    let mut engine = LayoutEngine::default();
    for channel in 0..6 {
        engine.register_channel(channel);
        for note in (channel * 10)..(channel * 10 + 9) {
            engine.register_note(channel, note);
        }
    }
    let before = all_regions(&engine);

    for step in 0..500usize {
        let channel = step * 7 % MAX_CHANNELS;
        let note = step * 31 % MAX_NOTES;
        engine.set_active(channel, note, step % 3 != 0);
        assert_eq!(all_regions(&engine), before);
    }
}

#[test]
fn reset_returns_to_power_on_state() {
    let mut engine = LayoutEngine::default();
    for channel in 0..MAX_CHANNELS {
        engine.register_channel(channel);
        engine.register_note(channel, channel * 8);
        engine.set_active(channel, channel * 8, true);
    }

    engine.reset();
    assert_eq!(engine, LayoutEngine::default());
    assert_eq!(engine.seen_channel_count(), 0);
    for channel in 0..MAX_CHANNELS {
        let entry = engine.channel(channel).unwrap();
        assert!(!entry.is_seen());
        assert!(entry.region().is_empty());
        assert!((0..MAX_NOTES).all(|n| {
            let note = entry.note(n).unwrap();
            !note.is_seen() && !note.is_active() && note.region().is_empty()
        }));
    }

    // And it behaves like a fresh engine afterwards
    let mut fresh = LayoutEngine::default();
    for engine in [&mut engine, &mut fresh] {
        engine.register_channel(7);
        engine.register_note(7, 40);
    }
    assert_eq!(engine, fresh);
    assert_eq!(engine.note(7, 40).unwrap().region(), Rect::new(0, 0, 32, 16));
}
