// Shared tuning constants for the hero renderer. Both the scene and the
// scroll side read these; keep units in the comments.

// Responsive layout
pub const MOBILE_BREAKPOINT_PX: u32 = 768; // below this width the mobile layout applies
pub const DESKTOP_MESH_SCALE: f32 = 1.0;
pub const MOBILE_MESH_SCALE: f32 = 0.7;
pub const DESKTOP_CAMERA_Z: f32 = 5.0;
pub const MOBILE_CAMERA_Z: f32 = 6.5;
pub const DEVICE_PIXEL_RATIO_MAX: f64 = 2.0; // cap backing-store resolution

// Camera
pub const CAMERA_FOV_DEG: f32 = 50.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Mesh
pub const MESH_RADIUS: f32 = 1.85;
pub const MESH_SUBDIVISIONS: u32 = 5;

// Scroll mapping
pub const VELOCITY_SCALE: f32 = 0.01; // px of scroll delta -> velocity units
pub const VELOCITY_IDLE_DELAY_SEC: f32 = 0.12; // quiet time before the decay starts
pub const VELOCITY_DECAY_SEC: f32 = 0.5;
pub const ROTATION_EASE_SEC: f32 = 0.3;
pub const ROTATION_X_TURNS: f32 = 3.0; // multiples of pi across full progress
pub const ROTATION_Y_TURNS: f32 = 4.5;
pub const RAIL_EASE_SEC: f32 = 0.12;

// Idle bob (applied while |velocity| is below the threshold)
pub const IDLE_VELOCITY_THRESHOLD: f32 = 0.01;
pub const BOB_FREQUENCY: f32 = 0.45; // rad/s, period ~14s
pub const BOB_AMPLITUDE: f32 = 0.06; // world units
pub const BOB_DECAY_PER_FRAME: f32 = 0.9;

// Section tracking and reveal
pub const SECTION_TWEEN_SEC: f32 = 1.2;
pub const REVEAL_WINDOW_START: f32 = 0.8; // section top at 80% of viewport height
pub const REVEAL_WINDOW_END: f32 = 0.2; // ...scrubbed until it reaches 20%
pub const REVEAL_ELEMENT_SEC: f32 = 1.0;
pub const REVEAL_STAGGER_SEC: f32 = 0.15;
pub const REVEAL_OFFSET_Y_PX: f32 = 80.0;
pub const REVEAL_TILT_DEG: f32 = -10.0;

// Post-processing
pub const BLOOM_STRENGTH: f32 = 0.35;
pub const BLOOM_RADIUS: f32 = 0.25;
pub const BLOOM_THRESHOLD: f32 = 0.95;
pub const GRAIN_AMOUNT: f32 = 0.02;
