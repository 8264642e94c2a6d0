//! Bob Jenkins' lookup3 `hashlittle`, byte-at-a-time variant.
//!
//! Non-cryptographic, with full avalanche on short keys. Output matches the
//! reference C implementation for every key length and seed.

const INITIAL_STATE: u32 = 0xdead_beef;
const BLOCK_LEN: usize = 12;

/// Hashes `key` into 32 bits, perturbed by `seed`.
#[allow(clippy::cast_possible_truncation)]
pub fn hashlittle(key: &[u8], seed: u32) -> u32 {
    // lookup3 folds the key length into 32 bits.
    let init = INITIAL_STATE.wrapping_add(key.len() as u32).wrapping_add(seed);
    let (mut a, mut b, mut c) = (init, init, init);

    let mut rest = key;
    while rest.len() > BLOCK_LEN {
        let (block, tail) = rest.split_at(BLOCK_LEN);
        let [wa, wb, wc] = words(block);
        a = a.wrapping_add(wa);
        b = b.wrapping_add(wb);
        c = c.wrapping_add(wc);
        (a, b, c) = mix(a, b, c);
        rest = tail;
    }

    // Zero-length tail skips the final mix.
    if rest.is_empty() {
        return c;
    }

    let [wa, wb, wc] = words(rest);
    if rest.len() > 8 {
        c = c.wrapping_add(wc);
    }
    if rest.len() > 4 {
        b = b.wrapping_add(wb);
    }
    a = a.wrapping_add(wa);

    let (_, _, c) = finalize(a, b, c);
    c
}

/// Reads up to 12 bytes as three little-endian words, zero-padding the remainder.
fn words(bytes: &[u8]) -> [u32; 3] {
    let mut block = [0u8; BLOCK_LEN];
    let len = bytes.len().min(BLOCK_LEN);
    block[..len].copy_from_slice(&bytes[..len]);

    let word = |at: usize| u32::from_le_bytes([block[at], block[at + 1], block[at + 2], block[at + 3]]);
    [word(0), word(4), word(8)]
}

const fn mix(mut a: u32, mut b: u32, mut c: u32) -> (u32, u32, u32) {
    a = a.wrapping_sub(c);
    a ^= c.rotate_left(4);
    c = c.wrapping_add(b);
    b = b.wrapping_sub(a);
    b ^= a.rotate_left(6);
    a = a.wrapping_add(c);
    c = c.wrapping_sub(b);
    c ^= b.rotate_left(8);
    b = b.wrapping_add(a);
    a = a.wrapping_sub(c);
    a ^= c.rotate_left(16);
    c = c.wrapping_add(b);
    b = b.wrapping_sub(a);
    b ^= a.rotate_left(19);
    a = a.wrapping_add(c);
    c = c.wrapping_sub(b);
    c ^= b.rotate_left(4);
    b = b.wrapping_add(a);
    (a, b, c)
}

const fn finalize(mut a: u32, mut b: u32, mut c: u32) -> (u32, u32, u32) {
    c ^= b;
    c = c.wrapping_sub(b.rotate_left(14));
    a ^= c;
    a = a.wrapping_sub(c.rotate_left(11));
    b ^= a;
    b = b.wrapping_sub(a.rotate_left(25));
    c ^= b;
    c = c.wrapping_sub(b.rotate_left(16));
    a ^= c;
    a = a.wrapping_sub(c.rotate_left(4));
    b ^= a;
    b = b.wrapping_sub(a.rotate_left(14));
    c ^= b;
    c = c.wrapping_sub(b.rotate_left(24));
    (a, b, c)
}
