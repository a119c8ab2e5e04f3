use linecoder_rs::phy::{CodeType, Emitter};
use linecoder_rs::transmission::{Destination, FixedSource, ProbeSink, Source};
use linecoder_rs::{Error, Information, Result};
use std::sync::{Arc, Mutex};

fn bits(pattern: &str) -> Information<bool> {
    Information::parse_bits(pattern).expect("test pattern should be 0/1 only")
}

/// Records its name into a shared log on every delivery
struct Tagged {
    name: &'static str,
    log: Arc<Mutex<Vec<&'static str>>>,
}

impl Destination<f32> for Tagged {
    fn receive(&mut self, _information: &Information<f32>) -> Result<()> {
        self.log.lock().unwrap().push(self.name);
        Ok(())
    }
}

struct Failing;

impl Destination<f32> for Failing {
    fn receive(&mut self, _information: &Information<f32>) -> Result<()> {
        Err(Error::Config("sink refused the block".to_string()))
    }
}

#[test]
fn sample_count_is_bits_times_samples_per_bit() {
    let message = bits("1101000111010");
    for code in CodeType::ALL {
        for samples_per_bit in [1, 2, 3, 4, 9, 10, 30] {
            let emitter = Emitter::new(code, samples_per_bit, 1.0, -1.0);
            let samples = emitter.encode(&message);
            assert_eq!(
                samples.len(),
                message.len() * samples_per_bit,
                "{} with {} samples per bit",
                code,
                samples_per_bit
            );
        }
    }
}

#[test]
fn nrz_and_rz_reference_waveforms() {
    let message = bits("101");

    let nrz = Emitter::new(CodeType::Nrz, 3, 1.0, -1.0);
    assert_eq!(
        nrz.encode(&message).as_slice(),
        &[1.0, 1.0, 1.0, -1.0, -1.0, -1.0, 1.0, 1.0, 1.0]
    );

    let rz = Emitter::new(CodeType::Rz, 3, 1.0, -1.0);
    assert_eq!(
        rz.encode(&message).as_slice(),
        &[0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0]
    );
}

#[test]
fn rz_thirds_hold_for_every_bit() {
    let message = bits("0110100");
    let spb = 12;
    let rz = Emitter::new(CodeType::Rz, spb, 0.8, -5.0);
    let samples = rz.encode(&message);

    for (i, &bit) in message.iter().enumerate() {
        let window = &samples.as_slice()[i * spb..(i + 1) * spb];
        let middle = if bit { 0.8 } else { 0.0 };
        assert!(window[..4].iter().all(|&s| s == 0.0));
        assert!(window[4..8].iter().all(|&s| s == middle));
        assert!(window[8..].iter().all(|&s| s == 0.0));
    }
}

#[test]
fn nrzt_runs_are_flat_between_their_edges() {
    // run of four 1s between two 0s
    let message = bits("0111100");
    let spb = 9;
    let nrzt = Emitter::new(CodeType::Nrzt, spb, 2.0, -2.0);
    let samples = nrzt.encode(&message);

    // from the end of the run's rising ramp to the start of its falling ramp
    let run = &samples.as_slice()[spb + spb / 3..5 * spb - spb / 3 + 1];
    assert!(run.iter().all(|&s| s == 2.0));

    // the two trailing 0s share one plateau: no ramp where they meet
    let tail = &samples.as_slice()[5 * spb + spb / 3..7 * spb - spb / 3 + 1];
    assert!(tail.iter().all(|&s| s == -2.0));

    // whole transmission starts at zero
    assert_eq!(samples.as_slice()[0], 0.0);
}

#[test]
fn nrzt_isolated_bit_ramps_inside_its_own_window() {
    let message = bits("101");
    let spb = 9;
    let nrzt = Emitter::new(CodeType::Nrzt, spb, 1.0, -1.0);
    let samples = nrzt.encode(&message);
    let window = &samples.as_slice()[spb..2 * spb];

    assert_eq!(window[0], 0.0);
    assert!(window[1] < 0.0 && window[1] > -1.0);
    assert!(window[3..7].iter().all(|&s| s == -1.0));
    assert!(window[8] < 0.0 && window[8] > -1.0);
}

#[test]
fn emission_reaches_every_destination_in_registration_order() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut emitter = Emitter::new(CodeType::Nrz, 4, 1.0, 0.0);
    for name in ["first", "second", "third"] {
        emitter.connect(Box::new(Tagged {
            name,
            log: Arc::clone(&log),
        }));
    }
    assert_eq!(emitter.destinations(), 3);

    emitter
        .encode_and_emit(&bits("10"))
        .expect("emission should succeed");

    assert_eq!(*log.lock().unwrap(), vec!["first", "second", "third"]);
}

#[test]
fn every_destination_sees_the_same_block() {
    let mut emitter = Emitter::new(CodeType::Nrzt, 6, 1.0, -1.0);
    let a = ProbeSink::<f32>::new();
    let b = ProbeSink::<f32>::new();
    let (ha, hb) = (a.handle(), b.handle());
    emitter.connect(Box::new(a));
    emitter.connect(Box::new(b));

    emitter.encode_and_emit(&bits("1001")).unwrap();

    assert_eq!(ha.received(), hb.received());
    assert_eq!(ha.count(), 1);
}

#[test]
fn repeated_emission_is_identical() {
    let mut emitter = Emitter::new(CodeType::Nrzt, 10, 1.0, -0.5);
    let probe = ProbeSink::<f32>::new();
    let handle = probe.handle();
    emitter.connect(Box::new(probe));

    let message = bits("1100101110");
    emitter.encode_and_emit(&message).unwrap();
    emitter.encode_and_emit(&message).unwrap();

    let received = handle.received();
    assert_eq!(received.len(), 2);
    assert_eq!(received[0], received[1]);
    assert_eq!(message, bits("1100101110"));
}

#[test]
fn empty_message_yields_empty_waveform() {
    for code in CodeType::ALL {
        let mut emitter = Emitter::new(code, 9, 1.0, -1.0);
        let probe = ProbeSink::<f32>::new();
        let handle = probe.handle();
        emitter.connect(Box::new(probe));

        emitter.encode_and_emit(&Information::new()).unwrap();

        assert_eq!(handle.count(), 1);
        assert!(handle.last().unwrap().is_empty());
    }
}

#[test]
fn unsupported_code_type_emits_nothing() {
    let probe = ProbeSink::<f32>::new();
    let handle = probe.handle();

    let result = Emitter::from_tag("XYZ", 3, 1.0, -1.0).map(|mut emitter| {
        emitter.connect(Box::new(probe));
        emitter.encode_and_emit(&bits("101"))
    });

    assert!(matches!(result, Err(Error::UnsupportedCodeType(_))));
    assert_eq!(handle.count(), 0);
}

#[test]
fn code_type_tags_are_case_and_space_sensitive() {
    for tag in ["nrz", " RZ ", "Nrzt"] {
        let probe = ProbeSink::<f32>::new();
        let handle = probe.handle();

        let result = Emitter::from_tag(tag, 3, 1.0, -1.0).map(|mut emitter| {
            emitter.connect(Box::new(probe));
            emitter.encode_and_emit(&bits("10"))
        });

        assert!(
            matches!(result, Err(Error::UnsupportedCodeType(_))),
            "{:?} should be rejected",
            tag
        );
        assert_eq!(handle.count(), 0);
    }
}

#[test]
fn failing_destination_stops_the_fan_out() {
    let mut emitter = Emitter::new(CodeType::Nrz, 3, 1.0, 0.0);
    let probe = ProbeSink::<f32>::new();
    let handle = probe.handle();
    emitter.connect(Box::new(Failing));
    emitter.connect(Box::new(probe));

    let result = emitter.encode_and_emit(&bits("1"));

    assert!(matches!(result, Err(Error::Config(_))));
    assert_eq!(handle.count(), 0);
}

#[test]
fn source_drives_emitter_through_the_chain() {
    let mut emitter = Emitter::from_tag("RZ", 6, 1.0, 0.0).unwrap();
    let probe = ProbeSink::<f32>::new();
    let handle = probe.handle();
    emitter.connect(Box::new(probe));

    let mut source = FixedSource::new(bits("01"));
    source.connect(Box::new(emitter));
    source.emit().unwrap();

    assert_eq!(
        handle.last().unwrap().as_slice(),
        &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0]
    );
}
