/// Binary min-heap over dense vertex indices, ordered by an external key
/// slice. Each vertex's slot is tracked in a side table so `decrease_key`
/// is O(log n) without a search.
///
/// The slot array is 1-based (`parent(i) = i / 2`, `left(i) = 2 * i`);
/// a tracked position of 0 means the vertex is not in the heap.
pub(crate) struct MutableMinHeap {
    slots: Vec<usize>,
    pos: Vec<usize>,
}

impl MutableMinHeap {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            // slot 0 is never read
            slots: vec![usize::MAX],
            pos: vec![0; n],
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len() - 1
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn contains(&self, v: usize) -> bool {
        self.pos[v] != 0
    }

    pub(crate) fn insert(&mut self, v: usize, keys: &[f64]) {
        self.slots.push(v);
        let i = self.len();
        self.pos[v] = i;
        self.sift_up(i, keys);
    }

    pub(crate) fn extract_min(&mut self, keys: &[f64]) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        let min = self.slots[1];
        let last = self.slots.pop()?;
        if !self.is_empty() {
            self.set(1, last);
            self.sift_down(1, keys);
        }
        self.pos[min] = 0;
        Some(min)
    }

    /// Caller must have already lowered `keys[v]`.
    pub(crate) fn decrease_key(&mut self, v: usize, keys: &[f64]) {
        self.sift_up(self.pos[v], keys);
    }

    fn sift_up(&mut self, mut i: usize, keys: &[f64]) {
        let x = self.slots[i];
        while i > 1 && keys[x] < keys[self.slots[i / 2]] {
            let parent = self.slots[i / 2];
            self.set(i, parent);
            i /= 2;
        }
        self.set(i, x);
    }

    fn sift_down(&mut self, mut i: usize, keys: &[f64]) {
        let x = self.slots[i];
        loop {
            let mut k = i * 2;
            if k > self.len() {
                break;
            }
            if k + 1 <= self.len() && keys[self.slots[k + 1]] < keys[self.slots[k]] {
                k += 1;
            }
            if keys[self.slots[k]] >= keys[x] {
                break;
            }
            let child = self.slots[k];
            self.set(i, child);
            i = k;
        }
        self.set(i, x);
    }

    fn set(&mut self, i: usize, v: usize) {
        self.slots[i] = v;
        self.pos[v] = i;
    }
}
