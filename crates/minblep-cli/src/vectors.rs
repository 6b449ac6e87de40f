//! Reference vector generation.
//!
//! Vectors are written as `[u64; N]` constants holding IEEE-754 bit patterns
//! so they survive a round trip through source code exactly.

use anyhow::Result;
use minblep_dsp::{
    blackman_window, dft, generate_minblep, inverse_dft, minimum_phase, real_cepstrum, sinc,
};
use minblep_types::KernelParams;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::Write;

/// Bit patterns per line.
const VALUES_PER_LINE: usize = 4;

/// Range of the random input buffers.
const INPUT_RANGE: f32 = 10.0;

/// A named set of reference vectors.
pub struct VectorSet {
    vectors: Vec<(String, Vec<f64>)>,
}

impl VectorSet {
    /// Run every pipeline stage on seeded random input.
    pub fn generate(seed: u64, len: usize, params: KernelParams) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut random = |n: usize| -> Vec<f64> {
            // Single precision inputs keep the stored patterns short
            (0..n)
                .map(|_| f64::from(rng.gen_range(-INPUT_RANGE..INPUT_RANGE)))
                .collect()
        };

        let sinc_x = random(len);
        let sinc_y: Vec<f64> = sinc_x.iter().map(|&x| sinc(x)).collect();

        let dft_re = random(len);
        let dft_im = random(len);
        let (dft_re_out, dft_im_out) = dft(&dft_re, &dft_im)?;

        let idft_re = random(len);
        let idft_im = random(len);
        let (idft_re_out, idft_im_out) = inverse_dft(&idft_re, &idft_im)?;

        let cepstrum_signal = random(len);
        let cepstrum = real_cepstrum(&cepstrum_signal);

        let min_phase_cepstrum = random(len);
        let min_phase = minimum_phase(&min_phase_cepstrum);

        let minblep: Vec<f64> = generate_minblep(params.zero_crossings, params.over_sampling);

        let vectors = vec![
            ("SINC_X".to_string(), sinc_x),
            ("SINC_Y".to_string(), sinc_y),
            (format!("BLACKMAN_{}", len), blackman_window(len)),
            ("DFT_REAL_TIME".to_string(), dft_re),
            ("DFT_IMAG_TIME".to_string(), dft_im),
            ("DFT_REAL_FREQ".to_string(), dft_re_out),
            ("DFT_IMAG_FREQ".to_string(), dft_im_out),
            ("IDFT_REAL_FREQ".to_string(), idft_re),
            ("IDFT_IMAG_FREQ".to_string(), idft_im),
            ("IDFT_REAL_TIME".to_string(), idft_re_out),
            ("IDFT_IMAG_TIME".to_string(), idft_im_out),
            ("CEPSTRUM_SIGNAL".to_string(), cepstrum_signal),
            ("CEPSTRUM_EXPECTED".to_string(), cepstrum),
            ("MIN_PHASE_CEPSTRUM".to_string(), min_phase_cepstrum),
            ("MIN_PHASE_EXPECTED".to_string(), min_phase),
            (
                format!("MINBLEP_{}_{}", params.zero_crossings, params.over_sampling),
                minblep,
            ),
        ];

        Ok(Self { vectors })
    }

    /// Number of vectors in the set.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Write all vectors as Rust constants.
    pub fn write_rust<W: Write>(&self, w: &mut W) -> Result<()> {
        for (i, (name, values)) in self.vectors.iter().enumerate() {
            if i > 0 {
                writeln!(w)?;
            }
            writeln!(w, "pub const {}: [u64; {}] = [", name, values.len())?;
            for chunk in values.chunks(VALUES_PER_LINE) {
                let line: Vec<String> = chunk
                    .iter()
                    .map(|v| format!("0x{:016x},", v.to_bits()))
                    .collect();
                writeln!(w, "    {}", line.join(" "))?;
            }
            writeln!(w, "];")?;
        }
        Ok(())
    }
}
