//! Default configuration values

/// Spaces between table columns
pub const TABLE_SPACING: usize = 2;

/// Layers whose kernels are listed as community supported
pub const COMMUNITY_KERNEL_LAYERS: &[&str] = &["meta-fsl-arm", "meta-fsl-arm-extra"];

/// Packages expected to have the same version on every board
pub const USERSPACE_PACKAGES: &[&str] = &["gstreamer", "libdrm", "udev"];

/// SoCs the SoC package table has a column for
pub const SOC_FAMILIES: &[&str] = &["mx28", "mx5", "mx6", "vf60"];

/// Packages whose version is resolved per SoC
pub const SOC_PACKAGES: &[&str] = &[
    "imx-test",
    "gst-fsl-plugin",
    "libfslcodec",
    "libfslparser",
    "imx-vpu",
    "imx-lib",
    "firmware-imx",
    "mxsldr",
    "gpu-viv-g2d",
    "xf86-video-imxfb-vivante",
    "gpu-viv-bin-mx6q",
    "directfb",
    "directfb-examples",
    "xf86-video-imxfb",
    "amd-gpu-bin-mx51",
    "libz160",
    "amd-gpu-x11-bin-mx51",
    "libfslvpuwrap",
    "fsl-alsa-plugins",
    "gstreamer1.0-plugins-imx",
    "imx-uuc",
    "libmcc",
    "mqxboot",
];

/// Settings file name inside the config directory
pub const SETTINGS_FILE: &str = "config.toml";
