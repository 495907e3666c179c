//! Random image choice

/// Random number generator (xorshift32)
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

const SEED_MIX: u32 = 0x9E37_79B9;

/// Pick one image path from `images` using `seed`
pub fn pick_image(images: &[String], seed: u32) -> Option<&str> {
    if images.is_empty() {
        return None;
    }
    // Spread small seeds over all bits; xorshift32 sticks at zero
    let mut state = seed ^ SEED_MIX;
    if state == 0 {
        state = SEED_MIX;
    }
    xorshift32(&mut state);
    let idx = (xorshift32(&mut state) >> 16) as usize % images.len();
    Some(images[idx].as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set() -> Vec<String> {
        vec!["a.jpeg".into(), "b.jpeg".into(), "c.jpeg".into()]
    }

    #[test]
    fn empty_set_picks_nothing() {
        assert_eq!(pick_image(&[], 42), None);
    }

    #[test]
    fn same_seed_same_pick() {
        let images = set();
        assert_eq!(pick_image(&images, 1234), pick_image(&images, 1234));
    }

    #[test]
    fn seeds_cover_every_image() {
        let images = set();
        let mut seen = [false; 3];
        for seed in 0..256u32 {
            let picked = pick_image(&images, seed).expect("non-empty set");
            let idx = images.iter().position(|p| p == picked).expect("from the set");
            seen[idx] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
