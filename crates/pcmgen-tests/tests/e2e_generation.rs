//! End-to-end generation tests: command-line options in, raw PCM file out,
//! decoded back through the inspect path.

use pcmgen_backend_pcm::{generate_bytes, pcm_hash};
use pcmgen_cli::commands::{generate, inspect};
use pcmgen_spec::{GenerationParams, Waveform};
use pcmgen_tests::fixture_matrix;
use pretty_assertions::assert_eq;
use std::path::Path;
use std::process::ExitCode;

fn run_generate(params: &GenerationParams, out_dir: &Path, seed: u32) -> ExitCode {
    let format = params.format.to_string();
    let options = generate::GenerateOptions {
        sample_rate: params.sample_rate,
        duration_seconds: params.duration_seconds,
        waveform: params.waveform,
        format: &format,
        channels: params.channels,
        tone_frequency: params.tone_frequency,
        output: None,
        out_dir: out_dir.to_str(),
        seed: Some(seed),
    };
    generate::run(&options, true).unwrap()
}

#[test]
fn every_waveform_and_format_round_trips_through_files() {
    let tmp = tempfile::tempdir().unwrap();

    for fixture in fixture_matrix() {
        let params = &fixture.params;
        assert_eq!(run_generate(params, tmp.path(), 9), ExitCode::SUCCESS, "{}", fixture.name);

        let path = tmp.path().join(params.default_file_name());
        let format = params.format.to_string();
        let summary = inspect::summarize_file(&path, &format, params.channels)
            .unwrap_or_else(|e| panic!("{}: {}", fixture.name, e));

        assert_eq!(summary.frames, params.frames(), "{}", fixture.name);
        assert_eq!(summary.bytes, params.byte_len(), "{}", fixture.name);
        assert_eq!(summary.max, params.format.peak(), "{}", fixture.name);
        assert!(summary.min >= params.format.bottom(), "{}", fixture.name);

        let expected = generate_bytes(params, 9).unwrap();
        assert_eq!(summary.pcm_hash, pcm_hash(&expected), "{}", fixture.name);
    }

    // One file per fixture, no leftover temporaries.
    let files = std::fs::read_dir(tmp.path()).unwrap().count();
    assert_eq!(files, fixture_matrix().len());
}

#[test]
fn sine_reference_scenario() {
    // 8 kHz, 1 kHz tone, 1 s, mono S16_LE.
    let tmp = tempfile::tempdir().unwrap();
    let params = GenerationParams::builder()
        .sample_rate(8000)
        .duration_seconds(1.0)
        .waveform(Waveform::Sine)
        .build();
    assert_eq!(run_generate(&params, tmp.path(), 0), ExitCode::SUCCESS);

    let path = tmp
        .path()
        .join("Fs_8000_Freq_1000_Channel_1_Format_S16_LE_Len_1_Wave_sine.pcm");
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(bytes.len(), 16000);

    let first: Vec<i16> = bytes[..16]
        .chunks_exact(2)
        .map(|c| i16::from_le_bytes([c[0], c[1]]))
        .collect();
    assert_eq!(first, vec![0, 23170, 32767, 23170, 0, -23170, -32767, -23170]);
}

#[test]
fn white_noise_default_name_omits_frequency() {
    let tmp = tempfile::tempdir().unwrap();
    let params = GenerationParams::builder()
        .sample_rate(16000)
        .duration_seconds(0.5)
        .waveform(Waveform::WhiteNoise)
        .channels(2)
        .build();
    assert_eq!(run_generate(&params, tmp.path(), 5), ExitCode::SUCCESS);

    let path = tmp
        .path()
        .join("Fs_16000_Channel_2_Format_S16_LE_Len_0.5_Wave_whitenoise.pcm");
    let summary = inspect::summarize_file(&path, "S16_LE", 2).unwrap();
    assert_eq!(summary.max, 32767);
    assert_eq!(summary.peak_ratio, Some(1.0));
}

#[test]
fn failed_runs_leave_no_files() {
    let tmp = tempfile::tempdir().unwrap();

    let mut params = GenerationParams::builder().duration_seconds(0.1).build();
    params.channels = 0;
    assert_eq!(run_generate(&params, tmp.path(), 0), ExitCode::from(1));

    let options = generate::GenerateOptions {
        sample_rate: 8000,
        duration_seconds: 0.1,
        waveform: Waveform::Pulse,
        format: "S24_LE",
        channels: 1,
        tone_frequency: 1000.0,
        output: None,
        out_dir: tmp.path().to_str(),
        seed: None,
    };
    assert_eq!(generate::run(&options, false).unwrap(), ExitCode::from(1));

    assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
}

#[test]
fn inspect_reads_big_endian_stereo() {
    let tmp = tempfile::tempdir().unwrap();
    let params = GenerationParams::builder()
        .sample_rate(8000)
        .duration_seconds(0.25)
        .waveform(Waveform::Pulse)
        .format("U32_BE".parse().unwrap())
        .channels(2)
        .build();
    assert_eq!(run_generate(&params, tmp.path(), 0), ExitCode::SUCCESS);

    let path = tmp.path().join(params.default_file_name());
    let summary = inspect::summarize_file(&path, "U32_BE", 2).unwrap();
    assert_eq!(summary.frames, 2000);
    assert_eq!(summary.min, 0);
    assert_eq!(summary.max, 4_294_967_295);
    assert_eq!(summary.mean, Some(2_147_483_647.5));

    // 16000 bytes is not a whole number of 12-byte frames.
    assert!(inspect::summarize_file(&path, "U32_BE", 3).is_err());
}
