// Default values shared by the settings store, the config records and the
// native front-end.

// Window
pub const DEFAULT_CLIENT_SIZE: [u32; 2] = [800, 600];
pub const DEFAULT_SCREEN_COLOR: [u8; 3] = [211, 211, 211]; // light gray

// Camera
pub const DEFAULT_FOVY_DEGREE: f32 = 30.0;
pub const DEFAULT_ROLL_DEGREE: f32 = 0.0;

// Depth map clip planes (scene units)
pub const DEFAULT_ZNEAR_PLANE: f32 = 15.0;
pub const DEFAULT_ZFAR_PLANE: f32 = 50.0;

// Screen-space ambient occlusion
pub const DEFAULT_OCCLUSION_INTENSITY: f32 = 0.5;
pub const DEFAULT_OCCLUSION_RADIUS: f32 = 2.5;

// Diffusion (glow) pass
pub const DEFAULT_DIFFUSION_INTENSITY: f32 = 0.5;
pub const DEFAULT_DIFFUSION_EXTENT: f32 = 1.0;

// Morph sliders start centred
pub const DEFAULT_MORPH_RATIO: f32 = 0.5;

// Blush overlay opacity
pub const DEFAULT_HOHO_ALPHA: f32 = 1.0;

// Render target formats handed to the viewer
pub const DEFAULT_DEPTH_MAP_FORMAT: &str = "R32F";
pub const DEFAULT_NORMAL_MAP_FORMAT: &str = "A8R8G8B8";

// Recording captures one frame every `record_step` ticks
pub const DEFAULT_RECORD_STEP: u32 = 5;

pub const SETTINGS_FILE_NAME: &str = "config.toml";
