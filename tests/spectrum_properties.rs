use halfdft::dft::{forward, real_half_size};
use halfdft::Complex64;

#[test]
fn half_size_matches_closed_form() {
    for n in 1..=1000usize {
        let ceil_half = (n + 1) / 2;
        let expected = ceil_half + if n % 2 == 0 { 1 } else { 0 };
        assert_eq!(real_half_size(n), expected, "n = {}", n);
        // DC through Nyquist inclusive
        assert_eq!(real_half_size(n), n / 2 + 1, "n = {}", n);
    }
}

#[test]
fn half_size_spot_checks() {
    let cases = [(1, 1), (2, 2), (3, 2), (4, 3), (5, 3), (512, 257)];
    for (n, h) in cases {
        assert_eq!(real_half_size(n), h);
    }
}

#[test]
fn forward_output_length_follows_size_law() {
    for n in [1usize, 2, 3, 4, 5, 17, 64, 100, 511, 512, 513] {
        let signal = vec![1i16; n];
        assert_eq!(forward(&signal).unwrap().len(), real_half_size(n));
    }
}

#[test]
fn constant_signal_is_dc_only() {
    for (n, c) in [(1usize, 9i16), (8, 3), (9, -4), (512, 1000), (513, -32768)] {
        let spectrum = forward(&vec![c; n]).unwrap();
        let dc = spectrum.get(0).unwrap();
        let expected = n as f64 * c as f64;
        assert!((dc.norm() - expected.abs()).abs() < 1e-6 * expected.abs().max(1.0));
        assert!(dc.im.abs() < 1e-6 * expected.abs().max(1.0));
        if c > 0 {
            assert!(dc.arg().abs() < 1e-9, "phase {}", dc.arg());
        }
        for (k, bin) in spectrum.bins().iter().enumerate().skip(1) {
            assert!(
                bin.norm() < 1e-6 * expected.abs(),
                "bin {} of n = {} has magnitude {}",
                k,
                n,
                bin.norm()
            );
        }
    }
}

#[test]
fn single_zero_sample() {
    let spectrum = forward(&[0]).unwrap();
    assert_eq!(spectrum.bins(), &[Complex64::new(0.0, 0.0)]);
    assert_eq!(halfdft::inverse(&spectrum, 1).unwrap(), vec![0]);
}

#[test]
fn cosine_peaks_at_its_bin() {
    let n = 64;
    let k = 5;
    let signal: Vec<i16> = (0..n)
        .map(|i| {
            let x = 2.0 * std::f64::consts::PI * (k * i) as f64 / n as f64;
            (10000.0 * x.cos()).round() as i16
        })
        .collect();
    let mags = forward(&signal).unwrap().magnitudes();
    let peak = mags
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
        .unwrap()
        .0;
    assert_eq!(peak, k);
    // a real cosine splits its energy between bins k and n - k
    assert!((mags[k] - 10000.0 * n as f64 / 2.0).abs() < 100.0);
}

#[test]
fn nyquist_and_dc_are_real_for_even_blocks() {
    let signal: Vec<i16> = (0..32).map(|i| (i * i % 17) as i16 - 8).collect();
    let spectrum = forward(&signal).unwrap();
    let bins = spectrum.bins();
    assert!(bins[0].im.abs() < 1e-9);
    assert!(bins[bins.len() - 1].im.abs() < 1e-9);
}
