mod input_translator;

pub use input_translator::InputTranslator;
