//! The fixed help listing printed by `-h`, `-?`, `--help` and on bad options.

/// Literal help text, one line per entry, without a trailing newline.
pub const HELP_TEXT: &str = r#"usage: spatialmedia [options] [files...]

By default prints out spatial media metadata from specified files.

positional arguments:
  file                  input/output files

optional arguments:
  -h, --help            show this help message and exit
  -i, --inject          injects spatial media metadata into the first file
                        specified (.mp4 or .mov) and saves the result to the
                        second file specified

Spherical Video:
  -p PROJECTION, --projection PROJECTION
                        projection type (equirect | cubemap | single_fisheye)

  -t STITCHING_SOFTWARE, --stitching-software STITCHING_SOFTWARE

  -s STEREO-MODE, --stereo STEREO-MODE
                        stereo mode (none | top-bottom | left-right)
                        "none": Mono frame layout.
                        "top-bottom": Top half contains the left eye and bottom half contains the right eye.
                        "left-right": Left half contains the left eye and right half contains the right eye.
                        ( RFC: https://github.com/google/spatial-media/tree/master/docs/spherical-video-rfc.md )

  -c CROP, --crop CROP  crop region. Must specify 6 integers in the form of
                        "w:h:f_w:f_h:x:y" where w=CroppedAreaImageWidthPixels
                        h=CroppedAreaImageHeightPixels f_w=FullPanoWidthPixels
                        f_h=FullPanoHeightPixels x=CroppedAreaLeftPixels
                        y=CroppedAreaTopPixels

Spatial Audio:
  -a, --spatial-audio   spatial audio. First-order periphonic ambisonics with
                        ACN channel ordering and SN3D normalization
                        Enables injection of spatial audio metadata. If enabled, the file must contain a
                        4-channel first-order ambisonics audio track with ACN channel ordering and SN3D
                        normalization; see the [Spatial Audio RFC](../docs/spatial-audio-rfc.md) for
                        more information."#;

/// Prints [`HELP_TEXT`] to stdout.
pub fn print_help() {
    println!("{}", HELP_TEXT);
}
