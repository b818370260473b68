// The companion to an image tensor: one label byte per item.
#[derive(Debug)]
pub struct LabelSet {
    labels: Vec<u8>,
}

impl LabelSet {
    pub fn new(labels: Vec<u8>) -> Self {
        LabelSet { labels }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn get(&self, index: usize) -> u8 {
        self.labels[index]
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.labels
    }
}
