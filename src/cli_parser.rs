//! Help text for kube-ident.

/// Print general usage information.
pub fn print_usage() {
    let version = env!("CARGO_PKG_VERSION");
    eprintln!(
        "kube-ident - Kubernetes manifest identifier validator v{}

USAGE:
    kube-ident-cli [OPTIONS] <COMMAND> [ARGS]

COMMANDS:
    name <VALUE>              Validate metadata.name
    label-key <KEY>           Validate a label key
    label-value <VALUE>       Validate a label value
    annotation-key <KEY>      Validate an annotation key
    annotation-value <VALUE>  Validate an annotation value
    api-version <VALUE>       Validate apiVersion
    api-group <VALUE>         Validate a CRD API group name
    kind <VALUE>              Validate kind
    labels KEY=VALUE...       Validate a set of labels
    annotations KEY=VALUE...  Validate a set of annotations
    fields <FILE>             Validate extracted fields from a JSON file
    version                   Show version information
    help [COMMAND]            Show this help message

OPTIONS:
    --json               Print a JSON report
    --config FILE        Load configuration from a TOML file
    --log-format FORMAT  Log format on stderr (text, json)
    -v, --verbose        Enable debug logging
    --                   Treat everything after as arguments

EXAMPLES:
    kube-ident-cli kind Pod
    kube-ident-cli api-version apps/v1beta1
    kube-ident-cli labels app.kubernetes.io/name=web tier=frontend
    kube-ident-cli --json fields extracted.json
    kube-ident-cli label-value -- -leading-dash

ENVIRONMENT:
    KUBE_IDENT_CONFIG      Path of a TOML configuration file
    KUBE_IDENT_OUTPUT      Report format (human, json)
    KUBE_IDENT_LOG_FORMAT  Log format (text, json)
    KUBE_IDENT_LOG_LEVEL   Default log filter when RUST_LOG is unset
    RUST_LOG               Log filter (debug, info, warn, error)

EXIT CODES:
    0  All values valid
    1  One or more values invalid
    2  Usage or configuration error
",
        version
    );
}

/// Print detailed help for a specific command.
pub fn print_command_help(command: &str) {
    match command {
        "name" | "label-key" | "label-value" | "annotation-key" | "annotation-value"
        | "api-version" | "api-group" | "kind" => print_single_help(command),
        "labels" | "annotations" => print_pairs_help(command),
        "fields" => print_fields_help(),
        _ => {
            eprintln!(
                "No detailed help available for '{}'. Use 'kube-ident-cli help' for general usage.",
                command
            );
        }
    }
}

fn print_single_help(command: &str) {
    let rule = match command {
        "name" => "lowercase RFC 1123 subdomain, at most 253 characters",
        "label-key" | "annotation-key" => {
            "[prefix/]name; prefix is a DNS subdomain (253), name is alphanumerics, '-', '_', '.' (63)"
        }
        "label-value" => "empty, or alphanumerics, '-', '.' with alphanumeric ends (63)",
        "annotation-value" => "any valid UTF-8 text",
        "api-version" => "version or group/version, e.g. v1, apps/v1beta1 (63)",
        "api-group" => "alphanumerics, '-', '.' with alphanumeric ends (253)",
        _ => "alphanumerics starting with an uppercase letter (63)",
    };

    eprintln!(
        "kube-ident-cli {} - Validate a single value

USAGE:
    kube-ident-cli {} <VALUE>

RULE:
    {}

EXIT CODES:
    0  Valid
    1  Invalid
",
        command, command, rule
    );
}

fn print_pairs_help(command: &str) {
    eprintln!(
        "kube-ident-cli {} - Validate a set of KEY=VALUE pairs

USAGE:
    kube-ident-cli {} KEY=VALUE...

DESCRIPTION:
    Every key and every value is checked and every problem is reported.
    Each pair is split on its first '='.
",
        command, command
    );
}

fn print_fields_help() {
    eprintln!(
        "kube-ident-cli fields - Validate extracted manifest fields

USAGE:
    kube-ident-cli fields <FILE>

DESCRIPTION:
    FILE is JSON holding the already-extracted identifier fields:
    {{\"apiVersion\": \"apps/v1\", \"kind\": \"Deployment\",
     \"metadata\": {{\"name\": \"web\", \"labels\": {{}}, \"annotations\": {{}}}}}}
"
    );
}
