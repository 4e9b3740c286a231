/// 火星探測車相機代號 → 完整名稱，未知代號原樣回傳
pub fn camera_full_name(code: &str) -> &str {
    match code {
        "FHAZ" => "Front Hazard Avoidance Camera",
        "RHAZ" => "Rear Hazard Avoidance Camera",
        "MAST" => "Mast Camera",
        "CHEMCAM" => "Chemistry and Camera Complex",
        "MAHLI" => "Mars Hand Lens Imager",
        "MARDI" => "Mars Descent Imager",
        "NAVCAM" => "Navigation Camera",
        "PANCAM" => "Panoramic Camera",
        "MINITES" => "Miniature Thermal Emission Spectrometer (Mini-TES)",
        "ENTRY" => "Entry, Descent, and Landing Camera",
        "EDL_RUCAM" => "Rover Up-Look Camera",
        "EDL_DDCAM" => "Descent Stage Down-Look Camera",
        "EDL_PUCAM1" => "Parachute Up-Look Camera A",
        "EDL_PUCAM2" => "Parachute Up-Look Camera B",
        "NAVCAM_LEFT" => "Navigation Camera - Left",
        "NAVCAM_RIGHT" => "Navigation Camera - Right",
        "MCZ_RIGHT" => "Mast Camera Zoom - Right",
        "MCZ_LEFT" => "Mast Camera Zoom - Left",
        "FRONT_HAZCAM_LEFT_A" => "Front Hazard Avoidance Camera - Left A",
        "FRONT_HAZCAM_RIGHT_A" => "Front Hazard Avoidance Camera - Right A",
        "REAR_HAZCAM_LEFT" => "Rear Hazard Avoidance Camera - Left",
        "REAR_HAZCAM_RIGHT" => "Rear Hazard Avoidance Camera - Right",
        "SKYCAM" => "MEDA Skycam",
        "SHERLOC_WATSON" => "SHERLOC WATSON Camera",
        "SUPERCAM_RMI" => "SuperCam Remote Micro Imager",
        "LCAM" => "Lander Vision System Camera",
        other => other,
    }
}
