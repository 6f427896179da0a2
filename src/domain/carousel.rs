// src/domain/carousel.rs

/// Position within a fixed-length, wrapping slide show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    /// Out-of-range starting positions land on the last slide.
    pub fn new(index: usize, len: usize) -> Self {
        Self { index: 0, len }.go_to(index)
    }

    pub fn index(self) -> usize {
        self.index
    }

    pub fn len(self) -> usize {
        self.len
    }

    pub fn next(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            index: (self.index + 1) % self.len,
            ..self
        }
    }

    pub fn prev(self) -> Self {
        if self.len == 0 {
            return self;
        }
        let index = if self.index == 0 {
            self.len - 1
        } else {
            self.index - 1
        };
        Self { index, ..self }
    }

    pub fn go_to(self, index: usize) -> Self {
        Self {
            index: index.min(self.len.saturating_sub(1)),
            ..self
        }
    }
}
