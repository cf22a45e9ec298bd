//! Property tests for the typewriter state machine.

use proptest::prelude::*;

use vitrine::domain::services::Phase;
use vitrine::Typewriter;

fn subtitle() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-zA-Zé ✓]{0,12}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The shown text is always a prefix of the current subtitle.
    #[test]
    fn property_text_is_prefix_of_current_subtitle(
        script in proptest::collection::vec(subtitle(), 1..5),
        ticks in 0usize..200,
    ) {
        let mut tw = Typewriter::with_default_timings(script.clone());
        for _ in 0..ticks {
            let frame = tw.tick();
            prop_assert!(frame.index < script.len());
            prop_assert!(script[frame.index].starts_with(&frame.text));
            if frame.phase == Phase::Pausing {
                prop_assert_eq!(&frame.text, &script[frame.index]);
            }
        }
    }

    /// PROPERTY: A full cycle returns to the empty first subtitle.
    #[test]
    fn property_cycle_returns_to_start(script in proptest::collection::vec(subtitle(), 1..5)) {
        let mut tw = Typewriter::with_default_timings(script.clone());
        let mut elapsed = std::time::Duration::ZERO;
        let cycle = tw.cycle_duration();

        while elapsed < cycle {
            elapsed += tw.next_delay();
            tw.tick();
        }

        prop_assert_eq!(elapsed, cycle);
        prop_assert_eq!(tw.index(), 0);
        prop_assert_eq!(tw.phase(), Phase::Typing);
        prop_assert_eq!(tw.text(), "");
    }
}
