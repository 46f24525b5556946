use std::fs;
use std::path::Path;

/// Vertex and fragment shader text, as split out of a single `.shader` file.
///
/// The file format interleaves both stages in one text file; a line
/// containing `#shader` switches the current section to `vertex` or
/// `fragment` and is itself never part of the output.
#[derive(Debug, Clone, Default, Hash, PartialEq, Eq)]
pub struct ShaderSource {
    pub vertex: String,
    pub fragment: String,
}

#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
enum Section {
    None,
    Vertex,
    Fragment,
}

impl ShaderSource {
    pub fn parse(text: &str) -> Self {
        let mut vertex = String::new();
        let mut fragment = String::new();
        let mut section = Section::None;

        for line in text.lines() {
            if line.contains("#shader") {
                // "vertex" is checked first; a line naming both stages
                // resolves to the vertex section.
                if line.contains("vertex") {
                    section = Section::Vertex;
                } else if line.contains("fragment") {
                    section = Section::Fragment;
                }
                continue;
            }
            match section {
                // Lines before the first directive land in both sections.
                Section::None => {
                    vertex.push_str(line);
                    vertex.push('\n');
                    fragment.push_str(line);
                    fragment.push('\n');
                },
                Section::Vertex => {
                    vertex.push_str(line);
                    vertex.push('\n');
                },
                Section::Fragment => {
                    fragment.push_str(line);
                    fragment.push('\n');
                },
            }
        }

        Self { vertex, fragment }
    }

    /// Reads and splits a shader file. An unreadable file is not fatal at
    /// this layer: it yields two empty sections, and the failure then
    /// surfaces when the empty sources refuse to compile.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(text) => Self::parse(&text),
            Err(e) => {
                warn!("Couldn't read shader file `{}`: {}", path.display(), e);
                Self::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ShaderSource;

    #[test]
    fn splits_vertex_and_fragment_sections() {
        let src = ShaderSource::parse("#shader vertex\nA\n#shader fragment\nB\n");
        assert_eq!(src.vertex, "A\n");
        assert_eq!(src.fragment, "B\n");
    }

    #[test]
    fn directive_lines_are_not_copied() {
        let src = ShaderSource::parse("#shader vertex\nvoid main() {}\n#shader fragment\nvoid main() {}\n");
        assert!(!src.vertex.contains("#shader"));
        assert!(!src.fragment.contains("#shader"));
    }

    #[test]
    fn no_directive_copies_the_whole_file_to_both_sections() {
        let text = "uniform mat4 u_mvp;\nvoid main() {}\n";
        let src = ShaderSource::parse(text);
        assert_eq!(src.vertex, text);
        assert_eq!(src.fragment, text);
    }

    #[test]
    fn empty_input_yields_empty_sections() {
        let src = ShaderSource::parse("");
        assert_eq!(src.vertex, "");
        assert_eq!(src.fragment, "");
    }

    #[test]
    fn missing_trailing_newline_is_normalized() {
        let src = ShaderSource::parse("#shader vertex\nA");
        assert_eq!(src.vertex, "A\n");
        assert_eq!(src.fragment, "");
    }

    #[test]
    fn vertex_wins_when_a_directive_names_both_stages() {
        let src = ShaderSource::parse("#shader vertex fragment\nA\n");
        assert_eq!(src.vertex, "A\n");
        assert_eq!(src.fragment, "");
    }

    #[test]
    fn unknown_directive_keeps_the_current_section() {
        let src = ShaderSource::parse("#shader vertex\nA\n#shader geometry\nB\n");
        assert_eq!(src.vertex, "A\nB\n");
        assert_eq!(src.fragment, "");
    }

    #[test]
    fn preamble_before_the_first_directive_goes_to_both_sections() {
        let src = ShaderSource::parse("P\n#shader vertex\nA\n#shader fragment\nB\n");
        assert_eq!(src.vertex, "P\nA\n");
        assert_eq!(src.fragment, "P\nB\n");
    }

    #[test]
    fn missing_file_yields_empty_sections() {
        let src = ShaderSource::load("Shaders/does_not_exist.shader");
        assert_eq!(src.vertex, "");
        assert_eq!(src.fragment, "");
    }

    #[test]
    fn bundled_shader_file_has_both_sections() {
        let src = ShaderSource::load("Shaders/basic.shader");
        assert!(src.vertex.contains("gl_Position"));
        assert!(!src.fragment.is_empty());
        assert!(!src.vertex.contains("#shader"));
        assert!(!src.fragment.contains("#shader"));
    }
}
