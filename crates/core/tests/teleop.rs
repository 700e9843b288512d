//! End-to-end tests: load a bindings document, dispatch keystrokes, and
//! observe the publishes on a recording transport.

use twistkey_core::{
	ChannelHandle, CommandFrame, INTERRUPT_CHAR, KEY_TIMEOUT_SENTINEL, MOTION_TOPIC, Payload,
	PayloadKind, SpeedState, Step, Teleop, Transport, TransportError, config,
};

/// Records every advertise and publish.
#[derive(Debug, Default)]
struct RecordingTransport {
	channels: Vec<(String, PayloadKind)>,
	published: Vec<(String, Payload)>,
}

impl Transport for RecordingTransport {
	fn advertise(&mut self, topic: &str, kind: PayloadKind) -> Result<ChannelHandle, TransportError> {
		self.channels.push((topic.to_string(), kind));
		Ok(ChannelHandle::from_index(self.channels.len() - 1))
	}

	fn publish(&mut self, handle: ChannelHandle, payload: &Payload) -> Result<(), TransportError> {
		let (topic, _) = self
			.channels
			.get(handle.index())
			.ok_or(TransportError::UnknownChannel(handle.index()))?;
		self.published.push((topic.clone(), payload.clone()));
		Ok(())
	}
}

const DOC: &str = r#"
move_bindings:
  forward: "i"
  backward: ","
  left: "j"
  right: "l"
  no_movement: "k"
  up: "t"
  down: "b"

holonomic_move_bindings:
  holonomic_forward: "I"
  holonomic_left: "J"

speed_bindings:
  increase_max_speed_by_10: "q"
  decrease_max_speed_by_10: "z"

custom_bindings:
  estop:
    description: "Emergency stop"
    key: "p"
    topic: "estop"
    topic_type: "std_msgs/Bool"
    data: true
"#;

fn engine(doc: &str) -> Teleop<RecordingTransport> {
	engine_with_speed(doc, SpeedState::new(0.5, 1.0, 1000.0, 1000.0))
}

fn engine_with_speed(doc: &str, speed: SpeedState) -> Teleop<RecordingTransport> {
	let mut transport = RecordingTransport::default();
	let registry = config::load_str(doc, &mut transport).unwrap();
	Teleop::new(registry, speed, transport).unwrap()
}

fn motion_frames(transport: &RecordingTransport) -> Vec<CommandFrame> {
	transport
		.published
		.iter()
		.filter(|(topic, _)| topic == MOTION_TOPIC)
		.map(|(_, payload)| match payload {
			Payload::Twist(frame) => *frame,
			other => panic!("non-twist payload on motion channel: {other:?}"),
		})
		.collect()
}

#[test]
fn round_trip_one_binding_per_namespace() {
	let mut teleop = engine(DOC);

	assert!(teleop.registry().move_vector('i').is_some());
	assert!(teleop.registry().holonomic_vector('I').is_some());
	assert!(teleop.registry().speed_factors('q').is_some());
	let estop = teleop.registry().custom('p').unwrap();
	assert_eq!(estop.topic, "estop");
	assert_eq!(estop.payload, Payload::Bool(true));

	assert_eq!(teleop.handle_key('p').unwrap(), Step::Continue);
	let transport = teleop.into_transport();
	assert_eq!(
		transport.published,
		vec![("estop".to_string(), Payload::Bool(true))]
	);
}

#[test]
fn motion_dispatch_is_pure() {
	let mut teleop = engine(DOC);
	teleop.handle_key('i').unwrap();
	teleop.handle_key('i').unwrap();

	let frames = motion_frames(&teleop.into_transport());
	assert_eq!(frames.len(), 2);
	assert_eq!(frames[0], frames[1]);
	assert_eq!(frames[0].linear.x, 0.5);
	assert_eq!(frames[0].angular.z, 0.0);
}

#[test]
fn holonomic_uses_strafe_axis() {
	let mut teleop = engine(DOC);
	teleop.handle_key('J').unwrap();

	let frames = motion_frames(&teleop.into_transport());
	assert_eq!(frames[0].linear.y, 0.5);
	assert_eq!(frames[0].linear.x, 0.0);
	assert_eq!(frames[0].angular.z, 0.0);
}

#[test]
fn speed_change_emits_no_motion_frame() {
	let mut teleop = engine(DOC);
	let step = teleop.handle_key('q').unwrap();

	assert_eq!(
		step,
		Step::SpeedChanged {
			speed: 0.5 * 1.1,
			turn: 1.0 * 1.1
		}
	);
	assert!(teleop.into_transport().published.is_empty());
}

#[test]
fn five_increases_from_defaults() {
	let mut teleop = engine(DOC);
	let mut last = (0.0, 0.0);
	for _ in 0..5 {
		if let Step::SpeedChanged { speed, turn } = teleop.handle_key('q').unwrap() {
			last = (speed, turn);
		} else {
			panic!("expected a speed change");
		}
	}

	assert!((last.0 - 0.8053).abs() < 1e-3);
	assert!((last.1 - 1.6105).abs() < 1e-3);
}

#[test]
fn speed_never_exceeds_limits() {
	let mut teleop = engine_with_speed(DOC, SpeedState::new(0.5, 1.0, 0.7, 1.2));
	for _ in 0..50 {
		teleop.handle_key('q').unwrap();
	}

	assert_eq!(teleop.speed().speed(), 0.7);
	assert_eq!(teleop.speed().turn(), 1.2);
}

#[test]
fn shrink_factor_never_increases_speed() {
	let mut teleop = engine(DOC);
	let mut previous = teleop.speed().speed();
	for _ in 0..20 {
		teleop.handle_key('z').unwrap();
		let current = teleop.speed().speed();
		assert!(current <= previous);
		previous = current;
	}
}

#[test]
fn speed_scales_subsequent_motion() {
	let mut teleop = engine(DOC);
	teleop.handle_key('q').unwrap();
	teleop.handle_key('i').unwrap();

	let frames = motion_frames(&teleop.into_transport());
	assert!((frames[0].linear.x - 0.55).abs() < 1e-12);
}

#[test]
fn unrecognized_key_while_stopped_publishes_nothing() {
	let mut teleop = engine(DOC);
	assert!(teleop.last_frame().is_zero());

	teleop.handle_key('#').unwrap();
	teleop.handle_key(KEY_TIMEOUT_SENTINEL).unwrap();
	teleop.handle_key(KEY_TIMEOUT_SENTINEL).unwrap();

	assert!(teleop.into_transport().published.is_empty());
}

#[test]
fn unrecognized_key_while_moving_publishes_one_stop() {
	let mut teleop = engine(DOC);
	teleop.handle_key('i').unwrap();
	teleop.handle_key('#').unwrap();
	teleop.handle_key('#').unwrap();

	let frames = motion_frames(&teleop.into_transport());
	assert_eq!(frames.len(), 2);
	assert!(!frames[0].is_zero());
	assert!(frames[1].is_zero());
}

#[test]
fn timeout_after_motion_stops_the_robot() {
	let mut teleop = engine(DOC);
	teleop.handle_key('i').unwrap();
	teleop.handle_key(KEY_TIMEOUT_SENTINEL).unwrap();

	assert!(teleop.last_frame().is_zero());
	let frames = motion_frames(&teleop.into_transport());
	assert!(frames[1].is_zero());
}

#[test]
fn motion_takes_precedence_over_custom() {
	let doc = r#"
move_bindings:
  forward: "x"

custom_bindings:
  estop:
    description: "Emergency stop"
    key: "x"
    topic: "estop"
    topic_type: "std_msgs/Bool"
    data: true
"#;
	let mut teleop = engine(doc);
	teleop.handle_key('x').unwrap();

	let transport = teleop.into_transport();
	assert_eq!(transport.published.len(), 1);
	assert_eq!(transport.published[0].0, MOTION_TOPIC);
}

#[test]
fn unbound_interrupt_quits_without_publishing() {
	let mut teleop = engine(DOC);
	teleop.handle_key('i').unwrap();

	assert_eq!(teleop.handle_key(INTERRUPT_CHAR).unwrap(), Step::Quit);
	// The stop frame is not emitted on the quit path.
	let frames = motion_frames(&teleop.into_transport());
	assert_eq!(frames.len(), 1);
}

#[test]
fn bound_interrupt_fires_its_binding_instead_of_quitting() {
	let doc = r#"
custom_bindings:
  panic:
    description: "Panic message"
    key: "\x03"
    topic: "panic"
    topic_type: "std_msgs/Empty"
"#;
	let mut teleop = engine(doc);

	assert_eq!(teleop.handle_key(INTERRUPT_CHAR).unwrap(), Step::Continue);
	let transport = teleop.into_transport();
	assert_eq!(transport.published, vec![("panic".to_string(), Payload::Empty)]);
}

#[test]
fn no_movement_key_acts_as_stop() {
	let mut teleop = engine(DOC);
	teleop.handle_key('i').unwrap();
	teleop.handle_key('k').unwrap();

	let frames = motion_frames(&teleop.into_transport());
	assert_eq!(frames.len(), 2);
	assert!(frames[1].is_zero());
}

#[test]
fn custom_channels_are_advertised_at_load_time() {
	let mut transport = RecordingTransport::default();
	let _registry = config::load_str(DOC, &mut transport).unwrap();

	assert_eq!(
		transport.channels,
		vec![("estop".to_string(), PayloadKind::Bool)]
	);
}
