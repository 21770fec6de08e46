//! Demonstrates enabling verbose logging for halfdft.
use halfdft::block::BlockSpectra;
use halfdft::Overflow;

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Trace)
        .init();

    let signal: Vec<i16> = (0..40).map(|i| (i * 97 % 50) as i16 - 25).collect();
    let spectra = BlockSpectra::analyze(&signal, 16).unwrap();
    spectra.synthesize(Overflow::Saturate).unwrap();
}
