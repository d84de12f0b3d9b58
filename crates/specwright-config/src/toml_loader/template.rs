//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Specwright Configuration
# Only override what you want to change -- missing fields use defaults.

[provider]
# base_url = "https://api.openai.com/v1"   # env: OPENAI_BASE_URL
# api_key_env = "OPENAI_API_KEY"            # variable holding the API key
# connect_timeout = 10                      # seconds, 1-3600
# request_timeout = 300                     # seconds, 1-3600

[models]
# default = "chatgpt-4o-latest"             # env: OPENAI_MODEL
# available = ["chatgpt-4o-latest", "gpt-4", "o1", "o3-mini"]

[session]
# system_prompt = "..."                     # replaces the interview prompt
# reference_document = "docs/design.md"     # example appended to synthesis prompts
# doc_type = "unified"                      # unified, requirements, design

[artifact]
# output_dir = "out"                        # unset: a temporary directory
# file_name = "document.md"

[logging]
# level = "info"                            # trace, debug, info, warn, error
"##
    .to_string()
}
