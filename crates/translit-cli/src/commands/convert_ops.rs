use serde::Serialize;

use translit_core::{Direction, Options, TranslitError};

#[derive(Debug, Serialize)]
pub struct ConvertOutput<'a> {
    pub input: &'a str,
    pub output: String,
    #[serde(flatten)]
    pub options: &'a Options,
}

#[derive(Debug, Serialize)]
pub struct LanguagesOutput {
    pub direction: &'static str,
    pub languages: Vec<&'static str>,
}

pub fn convert(input: &str, options: &Options) -> Result<String, TranslitError> {
    let output = translit_core::transliterate(input, options)?;
    tracing::debug!(
        input,
        output = output.as_str(),
        reverse = options.reverse,
        "converted"
    );
    Ok(output)
}

pub fn convert_cmd(words: &[String], options: &Options, json: bool) {
    let input = words.join(" ");
    let output = die!(convert(&input, options), "Error: {}");
    if json {
        let record = ConvertOutput {
            input: &input,
            output,
            options,
        };
        println!("{}", die!(serde_json::to_string(&record), "Error: {}"));
    } else {
        println!("{output}");
    }
}

pub fn languages(reverse: bool) -> LanguagesOutput {
    let direction = Direction::from(reverse);
    LanguagesOutput {
        direction: match direction {
            Direction::Forward => "forward",
            Direction::Reverse => "reverse",
        },
        languages: translit_core::languages(direction),
    }
}

pub fn languages_cmd(reverse: bool, json: bool) {
    if json {
        let out = languages(reverse);
        println!("{}", die!(serde_json::to_string(&out), "Error: {}"));
    } else {
        println!("{}", translit_core::languages_display(reverse));
    }
}
