#![no_main]
use libfuzzer_sys::fuzz_target;

use druggen_chem::MAX_BATCH_SIZE;

// Counts above this are only checked for rejection, not generated.
const GENERATED_LIMIT: i64 = 4096;

fuzz_target!(|input: (i64, u64, &str)| {
    let (count, seed, disease) = input;
    if count > GENERATED_LIMIT && count <= MAX_BATCH_SIZE as i64 {
        return;
    }
    match druggen_chem::generate_seeded(count, disease, seed) {
        Ok(batch) => {
            assert_eq!(batch.len() as i64, count);
            assert!(druggen_chem::is_ranked(&batch));
        }
        Err(_) => assert!(count < 0 || count > MAX_BATCH_SIZE as i64),
    }
});
