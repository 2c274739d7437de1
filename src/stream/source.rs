//! The [`CharSource`] abstraction and simple adapters.

/// Infinite, stateful producer of one character per draw.
pub trait CharSource {
    /// Produce the next character.
    fn draw(&mut self) -> char;
}

impl<S: CharSource + ?Sized> CharSource for &mut S {
    #[inline]
    fn draw(&mut self) -> char {
        (**self).draw()
    }
}

impl<S: CharSource + ?Sized> CharSource for Box<S> {
    #[inline]
    fn draw(&mut self) -> char {
        (**self).draw()
    }
}

/// Adapter turning a closure into a [`CharSource`].
#[derive(Debug, Clone)]
pub struct FromFn<F>(F);

/// Wrap a `FnMut() -> char` closure as a [`CharSource`].
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: FnMut() -> char,
{
    FromFn(f)
}

impl<F> CharSource for FromFn<F>
where
    F: FnMut() -> char,
{
    #[inline]
    fn draw(&mut self) -> char {
        (self.0)()
    }
}

/// Replays a recorded prefix once, then cycles through a tail forever.
///
/// Used to feed both finder strategies the exact same stream. With a tail of
/// `count` distinct symbols, any search for `count` distinct characters is
/// guaranteed to terminate once the prefix is exhausted.
#[derive(Debug, Clone)]
pub struct ReplaySource {
    prefix: Vec<char>,
    tail: Vec<char>,
    pos: usize,
}

impl ReplaySource {
    /// Create a replay source.
    ///
    /// # Panics
    ///
    /// Panics if `tail` is empty.
    pub fn new(prefix: Vec<char>, tail: Vec<char>) -> Self {
        assert!(!tail.is_empty(), "replay tail must not be empty");
        Self {
            prefix,
            tail,
            pos: 0,
        }
    }

    /// Characters drawn so far.
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl CharSource for ReplaySource {
    fn draw(&mut self) -> char {
        let pos = self.pos;
        self.pos += 1;
        match self.prefix.get(pos) {
            Some(&c) => c,
            None => self.tail[(pos - self.prefix.len()) % self.tail.len()],
        }
    }
}
