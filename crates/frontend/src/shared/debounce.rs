//! Отложенный запуск с отменой: каждый новый вызов отменяет ожидающую задачу,
//! выполняется только та, что пережила задержку.

use gloo_timers::callback::Timeout;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Счётчик поколений: задача запускается, только если её билет последний
#[derive(Clone, Default)]
struct Generation(Rc<Cell<u64>>);

impl Generation {
    fn advance(&self) -> u64 {
        let next = self.0.get().wrapping_add(1);
        self.0.set(next);
        next
    }

    /// Оборачивает задачу; более поздний `guard` или `advance` делает её пустой
    fn guard<F>(&self, task: F) -> impl FnOnce() + 'static
    where
        F: FnOnce() + 'static,
    {
        let ticket = self.advance();
        let generation = self.clone();
        move || {
            if generation.0.get() == ticket {
                task();
            }
        }
    }
}

#[derive(Clone)]
pub struct Debouncer {
    delay_ms: u32,
    generation: Generation,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            generation: Generation::default(),
            pending: Rc::new(RefCell::new(None)),
        }
    }

    /// Планирует `task`; ранее запланированная задача отменяется
    pub fn schedule<F>(&self, task: F)
    where
        F: FnOnce() + 'static,
    {
        let timeout = Timeout::new(self.delay_ms, self.generation.guard(task));
        // drop предыдущего Timeout снимает его таймер
        self.pending.borrow_mut().replace(timeout);
    }

    pub fn cancel(&self) {
        self.generation.advance();
        self.pending.borrow_mut().take();
    }
}
