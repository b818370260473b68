// Majority vote over the labels of the nearest reference images. The tally
// is a fixed array scanned in ascending label order with a strict-greater
// comparison, so ties always resolve to the lowest label value and the
// result never depends on tally order.
pub fn majority_label(labels: impl IntoIterator<Item = u8>) -> u8 {
    let mut counts = [0_u32; 256];
    for label in labels {
        counts[label as usize] += 1;
    }

    let mut best_label = 0_u8;
    let mut best_count = 0_u32;
    for (label, &count) in counts.iter().enumerate() {
        if count > best_count {
            best_label = label as u8;
            best_count = count;
        }
    }
    best_label
}
