use em_waveguides::prelude::*;

fn main() -> Result<(), WaveguideError> {
    // Mode charts for a few standard guides at a fixed operating point.
    for (name, frequency) in [("WR-90", 10.0e9), ("C-10", 12.0e9), ("Coax-50", 40.0e9)] {
        let Some(preset) = find_preset(name) else {
            continue;
        };
        let wg = from_geometry(preset.geometry, SolverOptions::default())?;
        println!("{} ({}) at {:.2} GHz", preset.name, preset.description, frequency / 1.0e9);
        println!("mode, fc(GHz), propagating, beta(rad/m), Z(ohm)");
        for entry in mode_chart(wg.as_ref(), frequency)?.into_iter().take(6) {
            let p = wg.calculated_params(frequency, entry.mode)?;
            println!(
                "{}, {:.4}, {}, {:.3}, {:.2}",
                entry.mode,
                entry.cutoff_frequency / 1.0e9,
                entry.is_propagating,
                p.propagation_constant,
                p.modal_impedance
            );
        }
        println!();
    }

    // Dispersion of the WR-90 dominant mode across X band.
    let wr90 = RectangularWaveguide::new(0.022_86, 0.010_16)?;
    println!("f(GHz), vp/c, vg/c, lambda_g(mm)");
    for p in dispersion_sweep(&wr90, Mode::te(1, 0), linspace(8.2e9, 12.4e9, 8))? {
        println!(
            "{:.3}, {:.4}, {:.4}, {:.3}",
            p.frequency / 1.0e9,
            p.phase_velocity / SPEED_OF_LIGHT,
            p.group_velocity / SPEED_OF_LIGHT,
            p.guided_wavelength * 1.0e3
        );
    }
    Ok(())
}
