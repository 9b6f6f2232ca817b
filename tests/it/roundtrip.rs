use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use bitrle::{rle, RleDecoder, RleEncoder};

use super::{decode, encode};

#[test]
fn pure_repeat() {
    let values = vec![true; 100];
    let data = encode(&values);
    assert_eq!(data, vec![0xc8, 0x01, 0x01]);
    assert_eq!(decode(&data, 100), values);

    // the stream holds nothing past the run
    let mut decoder = RleDecoder::new(&data);
    decoder.skip(100).unwrap();
    assert_eq!(decoder.get().unwrap(), None);
}

#[test]
fn alternating() {
    let values = (0..200).map(|i| i % 2 == 0).collect::<Vec<_>>();
    let data = encode(&values);
    assert_eq!(data.len(), 26);
    assert_eq!(data[0], 0x33);
    assert!(data[1..].iter().all(|byte| *byte == 0x55));
    assert_eq!(decode(&data, 200), values);
}

#[test]
fn repeat_then_alternating() {
    let mut values = vec![true; 100];
    values.extend((0..8).map(|i| i % 2 != 0));
    let data = encode(&values);
    assert_eq!(data, vec![0xc8, 0x01, 0x01, 0x03, 0b10101010]);
    assert_eq!(decode(&data, values.len()), values);
}

#[test]
fn short_run_then_long_run() {
    let mut encoder = RleEncoder::new();
    encoder.put_run(true, 3);
    encoder.put_run(false, 10);
    encoder.flush();

    let values = decode(encoder.buffer(), 13);
    let mut expected = vec![true; 3];
    expected.extend(vec![false; 10]);
    assert_eq!(values, expected);
}

#[test]
fn literal_tail_padding_reads_false() {
    // 13 values whose tail group is padded to 16
    let mut values = vec![true; 3];
    values.extend(vec![false; 10]);
    let data = encode(&values);

    let mut decoder = RleDecoder::new(&data);
    for expected in &values {
        assert_eq!(decoder.get().unwrap(), Some(*expected));
    }
    // the zero-padding of the last group decodes as `false`
    while let Some(value) = decoder.get().unwrap() {
        assert!(!value);
    }
}

#[test]
fn partitions_agree() {
    // the same sequence pushed through different put partitions encodes
    // identically
    let mut a = RleEncoder::new();
    a.put_run(true, 30);
    a.put_run(false, 12);

    let mut b = RleEncoder::new();
    for _ in 0..30 {
        b.put(true);
    }
    b.put_run(false, 5);
    b.put_run(false, 7);

    let mut c = RleEncoder::new();
    c.extend(std::iter::repeat(true).take(30).chain(std::iter::repeat(false).take(12)));

    assert_eq!(a.flush(), b.flush());
    assert_eq!(b.flush(), c.flush());
    assert_eq!(a.buffer(), b.buffer());
    assert_eq!(b.buffer(), c.buffer());
}

#[test]
fn indicator_overflow_starts_new_literal() {
    // alternating pairs keep the literal run open for all 512 values
    let values = (0..512).map(|i| (i / 2) % 2 == 0).collect::<Vec<_>>();
    let data = encode(&values);

    assert_eq!(data[0], (63 << 1) | 1);
    assert_eq!(data[64], (1 << 1) | 1);
    assert_eq!(data.len(), 66);
    assert_eq!(decode(&data, 512), values);
}

#[test]
fn flush_without_new_values_writes_nothing() {
    let mut encoder = RleEncoder::new();
    encoder.put_run(true, 50);
    let written = encoder.flush();
    assert_eq!(encoder.flush(), written);
    assert_eq!(encoder.buffer().len(), written);

    // and the encoder remains usable
    encoder.put_run(false, 50);
    assert!(encoder.flush() > written);
}

#[test]
fn cleared_encoder_is_fresh() {
    let mut rng = StdRng::from_seed([41; 32]);
    let values = (0..1000).map(|_| rng.gen::<bool>()).collect::<Vec<_>>();

    let mut reused = RleEncoder::new();
    reused.put_run(true, 17);
    reused.put_run(false, 3);
    reused.flush();
    reused.clear();
    reused.extend(values.iter().copied());
    reused.flush();

    assert_eq!(reused.buffer(), encode(&values).as_slice());
}

#[test]
fn random_sequences() {
    let mut rng = StdRng::from_seed([7; 32]);
    for length in [1usize, 7, 8, 9, 64, 100, 1000, 4096] {
        let values = (0..length).map(|_| rng.gen::<bool>()).collect::<Vec<_>>();
        let data = encode(&values);
        assert_eq!(decode(&data, length), values, "length {}", length);
    }
}

#[test]
fn random_runs() {
    // biased sequences produce long runs and exercise promotion
    let mut rng = StdRng::from_seed([13; 32]);
    let mut values = vec![];
    let mut encoder = RleEncoder::new();
    for _ in 0..200 {
        let value = rng.gen::<bool>();
        let run_length = rng.gen_range(1..100u64);
        encoder.put_run(value, run_length);
        values.extend(std::iter::repeat(value).take(run_length as usize));
    }
    encoder.flush();
    assert_eq!(decode(encoder.buffer(), values.len()), values);
}

#[test]
fn convenience_round_trip() {
    let values = vec![false, false, true, true, true, true, true, true, true, true, false];
    let data = rle::encode(values.iter().copied());
    assert_eq!(rle::decode(&data, values.len()).unwrap(), values);
}
