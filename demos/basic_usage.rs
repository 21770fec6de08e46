//! Transform a short synthetic tone block by block and rebuild it.
use halfdft::block::{BlockSpectra, DEFAULT_BLOCK_SIZE};
use halfdft::dft::{forward, inverse};
use halfdft::dump::{SignalDump, SpectrumDump};
use halfdft::Overflow;

fn main() {
    // Single block
    let block = [0i16, 700, 1000, 700, 0, -700, -1000, -700];
    let spectrum = forward(&block).unwrap();
    println!("signal: {}", SignalDump(&block));
    let rebuilt = inverse(&spectrum, block.len()).unwrap();
    println!("{}", SpectrumDump::new(spectrum, block.len()).unwrap());
    println!("rebuilt: {}", SignalDump(&rebuilt));

    // A longer signal in 512-sample blocks
    let signal: Vec<i16> = (0..1500)
        .map(|i| {
            let t = i as f64 / 8000.0;
            (8000.0 * (2.0 * std::f64::consts::PI * 440.0 * t).sin()) as i16
        })
        .collect();
    let spectra = BlockSpectra::analyze(&signal, DEFAULT_BLOCK_SIZE).unwrap();
    for (idx, block) in spectra.iter().enumerate() {
        let mags = block.spectrum.magnitudes();
        let peak = mags
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(k, _)| k)
            .unwrap_or(0);
        println!(
            "block {}: {} samples, peak bin {} ({:.1} Hz)",
            idx,
            block.len,
            peak,
            peak as f64 * 8000.0 / block.len as f64
        );
    }
    let rebuilt = spectra.synthesize(Overflow::Saturate).unwrap();
    assert_eq!(rebuilt, signal);
    println!("rebuilt {} samples exactly", rebuilt.len());
}
