#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use musicalsort::tone::{self, Recorder, SharedEmitter, ToneEmitter};
use musicalsort::{MusicalSortable, Result, Sonify};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// One hook call as seen by [`Journal`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    PreAssign { len: usize, index: usize, value: i64 },
    PostAssign { len: usize, index: usize, value: i64 },
    PreInsert { len: usize, index: usize, value: i64 },
    PostInsert { len: usize, index: usize, value: i64 },
}

impl Event {
    pub fn is_pre_assign(&self) -> bool {
        matches!(self, Event::PreAssign { .. })
    }

    pub fn is_pre_insert(&self) -> bool {
        matches!(self, Event::PreInsert { .. })
    }
}

/// Policy that writes down every hook call instead of playing it.
///
/// Clones share the same log, so sub-sortables built during a merge sort
/// report to the same place.
#[derive(Clone, Default)]
pub struct Journal {
    events: Rc<RefCell<Vec<Event>>>,
}

impl Journal {
    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub fn assignments(&self) -> usize {
        self.events.borrow().iter().filter(|e| e.is_pre_assign()).count()
    }

    pub fn insertions(&self) -> usize {
        self.events.borrow().iter().filter(|e| e.is_pre_insert()).count()
    }

    fn log(&self, event: Event) -> Result<()> {
        self.events.borrow_mut().push(event);
        Ok(())
    }
}

impl Sonify<i64> for Journal {
    fn pre_assignment(
        &mut self,
        _: &mut dyn ToneEmitter,
        len: usize,
        index: usize,
        value: &i64,
    ) -> Result<()> {
        let value = *value;
        self.log(Event::PreAssign { len, index, value })
    }

    fn post_assignment(
        &mut self,
        _: &mut dyn ToneEmitter,
        len: usize,
        index: usize,
        value: &i64,
    ) -> Result<()> {
        let value = *value;
        self.log(Event::PostAssign { len, index, value })
    }

    fn pre_insertion(
        &mut self,
        _: &mut dyn ToneEmitter,
        len: usize,
        index: usize,
        value: &i64,
    ) -> Result<()> {
        let value = *value;
        self.log(Event::PreInsert { len, index, value })
    }

    fn post_insertion(
        &mut self,
        _: &mut dyn ToneEmitter,
        len: usize,
        index: usize,
        value: &i64,
    ) -> Result<()> {
        let value = *value;
        self.log(Event::PostInsert { len, index, value })
    }
}

pub fn journaled(data: Vec<i64>) -> (MusicalSortable<i64, Journal>, Journal) {
    let journal = Journal::default();
    let sortable = MusicalSortable::new(data, tone::share(tone::Silent), journal.clone());
    (sortable, journal)
}

pub fn recorder() -> (Rc<RefCell<Recorder>>, SharedEmitter) {
    let recorder = Rc::new(RefCell::new(Recorder::new()));
    let shared: SharedEmitter = recorder.clone();
    (recorder, shared)
}

/// `0..len` in a reproducible random order.
pub fn shuffled(len: i64, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data: Vec<i64> = (0..len).collect();
    data.shuffle(&mut rng);
    data
}

/// Random values with plenty of duplicates and negatives.
pub fn noisy(len: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(-20..20)).collect()
}
