const DEFAULTS: [(&str, &str); 4] = [
	("GEOCODER_URL", "https://api.opencagedata.com/geocode/v1/json"),
	("GEOCODER_API_KEY", ""),
	("GEMINI_URL", "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent"),
	("GEMINI_API_KEY", ""),
];

fn main() {
	println!("cargo:rustc-env=RUST_BACKTRACE=1");

	if let Ok(path) = dotenvy::dotenv() {
		println!("cargo:rerun-if-changed={}", path.display());
	}

	for (name, default) in DEFAULTS {
		println!("cargo:rerun-if-env-changed={name}");
		let value = std::env::var(name).unwrap_or_else(|_| default.to_string());
		println!("cargo:rustc-env={name}={value}");
	}
}
