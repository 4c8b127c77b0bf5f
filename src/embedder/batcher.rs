// batcher.rs - keeps each request under the server's batch limit

pub struct Batcher {
    pub batch_size: usize,
}

impl Batcher {
    pub fn new(batch_size: usize) -> Self {
        Self {
            batch_size: batch_size.max(1),
        }
    }

    pub fn split<'a>(&self, items: &'a [String]) -> Vec<&'a [String]> {
        items.chunks(self.batch_size).collect()
    }
}

impl Default for Batcher {
    fn default() -> Self {
        Self::new(super::DEFAULT_BATCH_SIZE)
    }
}
