mod common;

use common::{journaled, recorder, Event};
use musicalsort::{
    AssignmentOnly, Config, EqualTempered, Error, Muted, MusicalSortable, Observable, ScaledTones,
};

#[test]
fn reads_are_silent_and_bounded() {
    let (recorder, emitter) = recorder();
    let sortable = MusicalSortable::new(vec![4, 5, 6], emitter, ScaledTones::default());

    assert_eq!(sortable.len(), 3);
    assert_eq!(*sortable.get(2).unwrap(), 6);
    assert_eq!(sortable.get(3), Err(Error::OutOfRange { index: 3, len: 3 }));
    assert!(recorder.borrow().is_empty());
}

#[test]
fn out_of_range_writes_fail_without_a_sound() {
    let (recorder, emitter) = recorder();
    let mut sortable = MusicalSortable::new(vec![1, 2], emitter, ScaledTones::default());

    assert_eq!(sortable.set(2, 9), Err(Error::OutOfRange { index: 2, len: 2 }));
    assert_eq!(sortable.insert(3, 9), Err(Error::OutOfRange { index: 3, len: 2 }));
    assert_eq!(sortable.remove(5), Err(Error::OutOfRange { index: 5, len: 2 }));
    assert_eq!(
        sortable.slice(1..3).map(|s| s.into_vec()),
        Err(Error::OutOfRange { index: 3, len: 2 })
    );

    assert_eq!(sortable.as_slice(), &[1, 2]);
    assert!(recorder.borrow().is_empty());
}

#[test]
fn inverted_slice_reports_its_start() {
    let (sortable, journal) = journaled(vec![1, 2, 3, 4]);

    assert_eq!(
        sortable.slice(3..1).map(|s| s.into_vec()),
        Err(Error::OutOfRange { index: 3, len: 4 })
    );
    assert_eq!(sortable.slice(2..2).map(|s| s.into_vec()), Ok(vec![]));
    assert!(journal.events().is_empty());
}

#[test]
fn hooks_wrap_the_mutation() {
    let (mut sortable, journal) = journaled(vec![10, 20, 30]);

    sortable.set(1, 25).unwrap();
    sortable.insert(3, 40).unwrap();
    sortable.push(50).unwrap();
    assert_eq!(sortable.remove(0).unwrap(), 10);

    assert_eq!(sortable.as_slice(), &[25, 30, 40, 50]);
    assert_eq!(
        journal.events(),
        vec![
            Event::PreAssign { len: 3, index: 1, value: 25 },
            Event::PostAssign { len: 3, index: 1, value: 25 },
            Event::PreInsert { len: 3, index: 3, value: 40 },
            Event::PostInsert { len: 4, index: 3, value: 40 },
            Event::PreInsert { len: 4, index: 4, value: 50 },
            Event::PostInsert { len: 5, index: 4, value: 50 },
        ]
    );
}

#[test]
fn swap_writes_twice_even_with_itself() {
    let (mut sortable, journal) = journaled(vec![1, 2, 3]);

    sortable.swap(0, 2).unwrap();
    sortable.swap(1, 1).unwrap();

    assert_eq!(sortable.as_slice(), &[3, 2, 1]);
    assert_eq!(journal.assignments(), 4);
    assert_eq!(
        sortable.swap(0, 3),
        Err(Error::OutOfRange { index: 3, len: 3 })
    );
}

#[test]
fn scaled_tones_play_index_then_value() {
    let (recorder, emitter) = recorder();
    let mut sortable = MusicalSortable::new(vec![0, 0, 0, 0], emitter, ScaledTones::default());

    // 200..2000 Hz over 4 elements: 450 Hz per step
    sortable.set(1, 3).unwrap();
    assert_eq!(recorder.borrow().frequencies(), vec![650.0, 1550.0]);

    // values beyond the length are pinned to the top of the range
    recorder.borrow_mut().clear();
    sortable.set(0, 100).unwrap();
    assert_eq!(recorder.borrow().frequencies(), vec![200.0, 2000.0]);
}

#[test]
fn scale_follows_the_current_length() {
    let (recorder, emitter) = recorder();
    let mut sortable = MusicalSortable::new(Vec::new(), emitter, ScaledTones::default());

    // empty: one step spans the whole range
    sortable.push(1).unwrap();
    // one element: still 1800 Hz per step
    sortable.push(1).unwrap();
    // two elements: 900 Hz per step
    sortable.push(1).unwrap();

    assert_eq!(
        recorder.borrow().frequencies(),
        vec![200.0, 2000.0, 2000.0, 2000.0, 2000.0, 1100.0]
    );
}

#[test]
fn tones_use_the_configured_duration() {
    let (recorder, emitter) = recorder();
    let config = Config::default().with_duration(std::time::Duration::from_millis(7));
    let mut sortable = MusicalSortable::new(vec![0, 0], emitter, ScaledTones::new(&config));

    sortable.set(0, 1).unwrap();
    assert!(recorder
        .borrow()
        .tones()
        .iter()
        .all(|t| t.duration == config.duration));
}

#[test]
fn slices_and_fresh_sortables_share_the_emitter() {
    let (recorder, emitter) = recorder();
    let sortable = MusicalSortable::new(vec![1, 2, 3, 4], emitter, ScaledTones::default());

    let mut half = sortable.slice(2..4).unwrap();
    assert_eq!(half.as_slice(), &[3, 4]);
    assert!(recorder.borrow().is_empty(), "copying is silent");

    half.set(0, 0).unwrap();
    let mut fresh = sortable.fresh();
    assert!(fresh.is_empty());
    fresh.push(9).unwrap();

    assert_eq!(recorder.borrow().len(), 4);
    assert_eq!(sortable.as_slice(), &[1, 2, 3, 4]);
}

#[test]
fn alternative_policies() {
    let (recorder, emitter) = recorder();

    let mut muted = MusicalSortable::new(vec![1, 2], emitter.clone(), Muted);
    muted.set(0, 5).unwrap();
    muted.push(6).unwrap();
    assert!(recorder.borrow().is_empty());

    let mut writes_only =
        MusicalSortable::new(vec![1, 2], emitter.clone(), AssignmentOnly(ScaledTones::default()));
    writes_only.push(3).unwrap();
    assert!(recorder.borrow().is_empty());
    writes_only.set(0, 0).unwrap();
    assert_eq!(recorder.borrow().len(), 2);

    recorder.borrow_mut().clear();
    let tempered_policy = EqualTempered::new(&Config::default());
    let mut tempered = MusicalSortable::new(vec![0], emitter, tempered_policy);
    tempered.set(0, 12).unwrap();
    // index 0 is the base pitch, value 12 is an octave above it
    assert_eq!(recorder.borrow().frequencies(), vec![200.0, 400.0]);
}
