// Shared benchmark helpers
#![allow(dead_code)]

/// Generate (path, size) pairs with a spread of sizes for benchmarking
pub fn generate_files(num_files: usize) -> Vec<(String, u64)> {
    (0..num_files)
        .map(|i| {
            let path = format!(
                "/objectStore/{:02x}/info%3Afedora%2Fns{}%3Aobj{}",
                i % 256,
                i % 7,
                i
            );
            // Scrambled but deterministic sizes
            let size = ((i as u64).wrapping_mul(2_654_435_761) % 10_000_000) + 1;
            (path, size)
        })
        .collect()
}
