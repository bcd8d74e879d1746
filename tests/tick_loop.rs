//! Full tick-loop integration: every tick produces exactly one brake-light
//! selection followed by exactly one MCM call, across policies, mode
//! switches, and ECM state changes.

use oxima::{
    BrakeLightMode, ImaState, InputSnapshot, McmOutput, Millis, ModePolicy, ModeSelector,
    OutputCommand, ToggleState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SinkCall {
    BrakeLights(BrakeLightMode),
    SetAllSignals(ImaState, u8),
    PassThrough,
}

#[derive(Default)]
struct RecordingSink {
    calls: Vec<SinkCall>,
}

impl McmOutput for RecordingSink {
    fn set_brake_light_mode(&mut self, mode: BrakeLightMode) {
        self.calls.push(SinkCall::BrakeLights(mode));
    }

    fn set_all_signals(&mut self, state: ImaState, percent: u8) {
        self.calls.push(SinkCall::SetAllSignals(state, percent));
    }

    fn pass_through_ecm_signals(&mut self) {
        self.calls.push(SinkCall::PassThrough);
    }
}

fn assert_well_formed_ticks(calls: &[SinkCall], ticks: usize) {
    assert_eq!(calls.len(), ticks * 2);
    for tick in calls.chunks(2) {
        assert!(matches!(tick[0], SinkCall::BrakeLights(_)));
        assert!(matches!(
            tick[1],
            SinkCall::SetAllSignals(..) | SinkCall::PassThrough
        ));
    }
}

#[test]
fn every_tick_yields_one_brake_mode_and_one_mcm_call() {
    let mut selector = ModeSelector::with_bindings([
        ModePolicy::Oem,
        ModePolicy::BlendedRpmGuarded,
        ModePolicy::ManualIgnoreEcm,
    ]);
    let mut sink = RecordingSink::default();

    let toggles = [
        ToggleState::Position0,
        ToggleState::Position0,
        ToggleState::Position1,
        ToggleState::Position1,
        ToggleState::Undefined,
        ToggleState::Position2,
        ToggleState::Position1,
        ToggleState::Position1,
    ];
    let ecm_states = [
        ImaState::Idle,
        ImaState::Prestart,
        ImaState::Assist,
        ImaState::Autostop,
        ImaState::Regen,
        ImaState::Undefined,
        ImaState::Start,
        ImaState::Idle,
    ];

    let mut ticks = 0;
    for (i, (&toggle, &ecm_state)) in toggles.iter().zip(ecm_states.iter()).enumerate() {
        let inputs = InputSnapshot {
            joystick_percent: (i as u8 * 13) % 101,
            ecm_command_percent: (i as u8 * 7) % 101,
            ecm_state,
            button_pressed: i % 3 == 0,
            brake_on: i % 4 == 1,
            clutch_pressed: i % 5 == 2,
            engine_rpm: 900 * i as u16,
            now: Millis::new(i as u32 * 100),
            latest_key_on: Millis::new(0),
        };
        selector.run_tick(toggle, &inputs, &mut sink);
        ticks += 1;
    }

    assert_well_formed_ticks(&sink.calls, ticks);
}

#[test]
fn oem_position_forwards_the_ecm_untouched() {
    let mut selector = ModeSelector::with_bindings([
        ModePolicy::Oem,
        ModePolicy::BlendedRpmGuarded,
        ModePolicy::ManualIgnoreEcm,
    ]);
    let mut sink = RecordingSink::default();

    let inputs = InputSnapshot {
        joystick_percent: 70,
        ecm_state: ImaState::Assist,
        ..InputSnapshot::default()
    };
    selector.run_tick(ToggleState::Position0, &inputs, &mut sink);

    assert_eq!(
        sink.calls,
        vec![
            SinkCall::BrakeLights(BrakeLightMode::Oem),
            SinkCall::PassThrough,
        ]
    );
}

#[test]
fn manual_position_drives_the_mcm_from_the_joystick() {
    let mut selector = ModeSelector::with_bindings([
        ModePolicy::Oem,
        ModePolicy::BlendedRpmGuarded,
        ModePolicy::ManualIgnoreEcm,
    ]);
    let mut sink = RecordingSink::default();

    let inputs = InputSnapshot {
        joystick_percent: 30,
        ecm_state: ImaState::Idle,
        ..InputSnapshot::default()
    };
    let out = selector.run_tick(ToggleState::Position2, &inputs, &mut sink);

    assert_eq!(out.command, OutputCommand::set(ImaState::Regen, 30));
    assert_eq!(
        sink.calls,
        vec![
            SinkCall::BrakeLights(BrakeLightMode::Automatic),
            SinkCall::SetAllSignals(ImaState::Regen, 30),
        ]
    );
}

#[test]
fn assist_is_never_emitted_against_autostop_outside_the_grace_window() {
    // the one fatal-class condition: no assist command while the ECM
    // requests autostop/start/prestart past the key-on grace window
    let mut selector = ModeSelector::with_bindings([
        ModePolicy::ManualAutoStartStop,
        ModePolicy::BlendedMaxRequest,
        ModePolicy::BlendedRpmGuarded,
    ]);
    let mut sink = RecordingSink::default();

    for (i, toggle) in [
        ToggleState::Position0,
        ToggleState::Position1,
        ToggleState::Position2,
    ]
    .into_iter()
    .enumerate()
    {
        for ecm_state in [ImaState::Prestart, ImaState::Autostop, ImaState::Start] {
            let inputs = InputSnapshot {
                joystick_percent: 75,
                ecm_command_percent: 75,
                button_pressed: true,
                ecm_state,
                now: Millis::new(100_000 * (i as u32 + 1)),
                latest_key_on: Millis::new(0),
                engine_rpm: 3_000,
                ..InputSnapshot::default()
            };
            let out = selector.run_tick(toggle, &inputs, &mut sink);
            assert!(
                !matches!(
                    out.command,
                    OutputCommand::SetAllSignals {
                        state: ImaState::Assist,
                        ..
                    }
                ),
                "{toggle:?}/{ecm_state:?} emitted assist"
            );
        }
    }
}

#[test]
fn wraparound_near_the_counter_limit_keeps_the_grace_window() {
    let mut selector = ModeSelector::with_bindings([
        ModePolicy::ManualAutoStartStop,
        ModePolicy::ManualAutoStartStop,
        ModePolicy::ManualAutoStartStop,
    ]);
    let mut sink = RecordingSink::default();

    // key-on just before the ms counter wraps; one second into prestart
    let inputs = InputSnapshot {
        ecm_state: ImaState::Prestart,
        latest_key_on: Millis::new(u32::MAX - 500),
        now: Millis::new(499),
        ..InputSnapshot::default()
    };
    let out = selector.run_tick(ToggleState::Position0, &inputs, &mut sink);
    assert_eq!(out.command, OutputCommand::PassThrough);
}
