//! Static banner and manual text

/// ASCII title printed before every run and manual page
pub const TITLE: &str = r#"
        __    _                             _____ _
       / _|  | |                           / __  (_)
 _ __ | |_ __| | ___   _ __ ___   __ _ ____`' / /'_ _ __ ___   __ _
| '_ \|  _/ _` |/ _ \ | '_ ` _ \ / _` |_  /  / / | | '_ ` _ \ / _` |
| |_) | || (_| | (_) || | | | | | (_| |/ / ./ /__| | | | | | | (_| |
| .__/|_| \__,_|\___/ |_| |_| |_|\__, /___|\_____/_|_| |_| |_|\__, |
| |               ______          __/ |                        __/ |
|_|              |______|        |___/                        |___/
"#;

/// Manual page shown for `--man` and `--synopsis`
pub const SYNOPSIS: &str = r#"
    NAME

        pfdo_mgz2img

    SYNOPSIS

        pfdo_mgz2img                                                    \
            [-i|--inputFile <inputFile>]                                \
            [--filterExpression <someFilter>]                           \
            [--analyzeFileIndex <someIndex>]                            \
            [--outputLeafDir <outputLeafDirFormat>]                     \
            [-o|--outputFileStem <outputFileStem>]                      \
            [-t|--outputFileType <outputFileType>]                      \
            [--saveImages]                                              \
            [--label <prefixForLabelDirectories>]                       \
            [-n|--normalize]                                            \
            [-l|--lookupTable <LUTfile>]                                \
            [--skipAllLabels]                                           \
            [-s|--skipLabelValueList <ListOfVoxelValuesToSkip>]         \
            [-f|--filterLabelValueList <ListOfVoxelValuesToInclude>]    \
            [-w|--wholeVolume <wholeVolDirName>]                        \
            [-a|--args <perFilterArgs>]                                 \
            [--threads <numThreads>]                                    \
            [--printElapsedTime]                                        \
            [--overwrite]                                               \
            [--followLinks]                                             \
            [--test]                                                    \
            [--verbose <level>]                                         \
            [-x|--man]                                                  \
            [-y|--synopsis]                                             \
            [--json] [--meta] [--savejson <DIR>]                        \
            [--saveinputmeta] [--saveoutputmeta]                        \
            <inputDir>                                                  \
            <outputDir>

    BRIEF EXAMPLE

        mkdir in out && chmod 777 out
        pfdo_mgz2img in out

    EXAMPLE

        pfdo_mgz2img                                                    \
            --filterExpression mgz                                      \
            -t jpg --threads 0 --printElapsedTime                       \
            /var/www/html/data /var/www/html/jpg

        Finds every file under /var/www/html/data whose name contains
        "mgz" and converts it into the same tree location under
        /var/www/html/jpg, then prints the elapsed time.

    DESCRIPTION

        `pfdo_mgz2img` runs `pfdo_mgz2image` over an input tree. Every
        option below is forwarded to the conversion engine, which does the
        directory walk, label extraction and slicing. Set the
        PFDO_MGZ2IMAGE_BIN environment variable to use an engine executable
        other than `pfdo_mgz2image` on PATH.

    ARGS

        [-i|--inputFile <inputFile>]
        Convert only this file, given relative to <inputDir>, instead of
        walking the tree.

        [--filterExpression <someFilter>]
        String that selects files of interest. Several comma separated
        filters run the engine once per filter, in order.

        [--analyzeFileIndex <someIndex>]
        Which file(s) in each directory to analyze: "-1" for all files,
        "m" for the middle one, "f" for the first, "l" for the last, or
        "<N>" for the file at index N.

        [--outputLeafDir <outputLeafDirFormat>]
        Format applied to every output leaf directory; '%s' stands for the
        original leaf name, so 'preview-%s' prefixes each leaf.

        [-o|--outputFileStem <outputFileStem>]
        Stem of the output images. An extension on the stem selects the
        output file type.

        [-t|--outputFileType <outputFileType>]
        Output file type; overrides the extension of <outputFileStem>.

        [--saveImages]
        Save the slices of each volume as image files next to the numpy
        files.

        [--label <prefixForLabelDirectories>]
        Prefix for every label directory name.

        [-n|--normalize]
        Normalize output pixel values to 0 and 1 instead of keeping the
        original voxel values.

        [-l|--lookupTable <LUTfile>]
        FreeSurfer-format lookup table used to name label directories.
        "__val__" names directories by numeric voxel value; "__fs__" uses
        the FreeSurferColorLUT.txt shipped with the engine.

        [--skipAllLabels]
        Skip all labels and convert only the whole volume.

        [-s|--skipLabelValueList <ListOfVoxelValuesToSkip>]
        Comma separated voxel values for which no directory is created.

        [-f|--filterLabelValueList <ListOfVoxelValuesToInclude>]
        Comma separated voxel values to extract. "-1" means all values.

        [-w|--wholeVolume <wholeVolDirName>]
        Directory (within the output dir) holding images of the entire
        volume.

        [-a|--args <perFilterArgs>]
        '|' separated argument strings; entry N belongs to filter N of a
        comma separated --filterExpression.

        [--threads <numThreads>]
        Split the innermost analysis loop into <numThreads> threads.

        [--printElapsedTime]
        Print the run time of each engine run.

        [--overwrite]
        Overwrite existing output files.

        [--followLinks]
        Follow symbolic links during the walk.

        [--test]
        Forwarded to the engine as a test run.

        [--verbose <level>]
        Verbosity level, 0 to 5.

            0: no internal output
            1: run start / stop notification
            2: as 1, with a simple progress bar
            3: as 2, with the list of input dirs/files
            5: as 3, with explicit read / analyze / write logging

        [-x|--man]
        Show full help.

        [-y|--synopsis]
        Show brief help.

        [--json]
        Print the JSON representation of this plugin.
"#;

/// Title plus version line
pub fn banner() -> String {
    format!("{TITLE}\nVersion: {}\n", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_contains_version() {
        let banner = banner();
        assert!(banner.starts_with(TITLE));
        assert!(banner.contains(&format!("Version: {}", env!("CARGO_PKG_VERSION"))));
    }

    #[test]
    fn test_synopsis_mentions_every_flag() {
        for param in crate::core::schema::PARAMETERS {
            assert!(SYNOPSIS.contains(param.flag), "{} missing", param.flag);
        }
    }
}
