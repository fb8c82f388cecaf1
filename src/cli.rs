use crate::pixel::blender::ArithmeticMode;
use crate::{Arguments, ImageOperation};
use clap::{
    arg, crate_authors, crate_description, crate_name, crate_version, value_parser, Arg,
    ArgMatches, Command,
};
use std::ffi::OsString;
use std::path::PathBuf;

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_input_file_argument(command);
        let command = Self::register_output_file_argument(command);
        let command = Self::register_second_input_file_argument(command);
        let command = Self::register_operation_argument(command);
        let command = Self::register_arithmetic_mode_argument(command);
        let command = Self::register_clamp_argument(command);
        let command = Self::register_factor_argument(command);
        Self::register_resize_target_arguments(command)
    }

    fn register_input_file_argument(command: Command) -> Command {
        command.arg(Self::create_input_file_argument())
    }

    fn register_output_file_argument(command: Command) -> Command {
        command.arg(Self::create_output_file_argument())
    }

    fn register_second_input_file_argument(command: Command) -> Command {
        command.arg(Self::create_second_input_file_argument())
    }

    fn register_operation_argument(command: Command) -> Command {
        command.arg(Self::create_operation_argument())
    }

    fn register_arithmetic_mode_argument(command: Command) -> Command {
        command.arg(Self::create_arithmetic_mode_argument())
    }

    fn register_clamp_argument(command: Command) -> Command {
        command.arg(Self::create_clamp_argument())
    }

    fn register_factor_argument(command: Command) -> Command {
        command.arg(Self::create_factor_argument())
    }

    fn register_resize_target_arguments(command: Command) -> Command {
        command
            .arg(Self::create_width_argument())
            .arg(Self::create_height_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_input_file_argument() -> Arg {
        Arg::new("input_file")
            .help("Path to the input image")
            .value_parser(value_parser!(PathBuf))
            .required(true)
    }

    fn create_output_file_argument() -> Arg {
        Arg::new("output_file")
            .help("Path to the PNG output image")
            .value_parser(value_parser!(PathBuf))
            .required(true)
    }

    fn create_second_input_file_argument() -> Arg {
        arg!(second_input: -s --second_input <FILE> "Path to the second input image")
            .required(false)
            .value_parser(value_parser!(PathBuf))
    }

    fn create_operation_argument() -> Arg {
        arg!(operation: -o --operation <OPERATION> "Image operation to apply")
            .default_value("Scale")
            .value_parser(value_parser!(ImageOperation))
    }

    fn create_arithmetic_mode_argument() -> Arg {
        arg!(arithmetic_mode: -m --arithmetic_mode <MODE> "Arithmetic mode for add and subtract")
            .default_value("Legacy")
            .value_parser(value_parser!(ArithmeticMode))
    }

    fn create_clamp_argument() -> Arg {
        arg!(clamp: -c --clamp "Clamp scaled channel values to the byte range")
    }

    fn create_factor_argument() -> Arg {
        arg!(factor: -f --factor <FACTOR> "Scale factor between 0.0 and 1.0")
            .default_value("1.0")
            .value_parser(value_parser!(f64))
    }

    fn create_width_argument() -> Arg {
        arg!(width: --width <WIDTH> "Target width for resize")
            .default_value("0")
            .value_parser(value_parser!(u32))
    }

    fn create_height_argument() -> Arg {
        arg!(height: --height <HEIGHT> "Target height for resize")
            .default_value("0")
            .value_parser(value_parser!(u32))
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            input_file: Self::extract_input_file_argument(matches),
            second_input_file: Self::extract_second_input_file_argument(matches),
            output_file: Self::extract_output_file_argument(matches),
            operation: Self::extract_operation_argument(matches),
            arithmetic_mode: Self::extract_arithmetic_mode_argument(matches),
            clamp: Self::extract_clamp_argument(matches),
            scale_factor: Self::extract_factor_argument(matches),
            target_width: Self::extract_width_argument(matches),
            target_height: Self::extract_height_argument(matches),
        }
    }

    fn extract_input_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("input_file")
            .expect("Required argument input_file not provided")
            .clone()
    }

    fn extract_output_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("output_file")
            .expect("Required argument output_file not provided")
            .clone()
    }

    fn extract_second_input_file_argument(matches: &ArgMatches) -> Option<PathBuf> {
        matches.get_one::<PathBuf>("second_input").cloned()
    }

    fn extract_operation_argument(matches: &ArgMatches) -> ImageOperation {
        matches
            .get_one::<ImageOperation>("operation")
            .expect("Operation must be provided, but was unset.")
            .to_owned()
    }

    fn extract_arithmetic_mode_argument(matches: &ArgMatches) -> ArithmeticMode {
        matches
            .get_one::<ArithmeticMode>("arithmetic_mode")
            .expect("Arithmetic mode must be provided, but was unset.")
            .to_owned()
    }

    fn extract_clamp_argument(matches: &ArgMatches) -> bool {
        matches.get_flag("clamp")
    }

    fn extract_factor_argument(matches: &ArgMatches) -> f64 {
        matches
            .get_one::<f64>("factor")
            .expect("Factor must be provided, but was unset.")
            .to_owned()
    }

    fn extract_width_argument(matches: &ArgMatches) -> u32 {
        matches
            .get_one::<u32>("width")
            .expect("Width must be provided, but was unset.")
            .to_owned()
    }

    fn extract_height_argument(matches: &ArgMatches) -> u32 {
        matches
            .get_one::<u32>("height")
            .expect("Height must be provided, but was unset.")
            .to_owned()
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}
