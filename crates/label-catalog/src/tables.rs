//! Static catalog tables. Order is load-bearing: it matches the index
//! order of the model's output vectors for each universe.

use triage_core::{Label, LabelKind};

const fn tactic(code: &'static str, name: &'static str, stix_id: &'static str) -> Label {
    Label {
        code,
        name,
        kind: LabelKind::Tactic,
        stix_id,
    }
}

const fn technique(code: &'static str, name: &'static str, stix_id: &'static str) -> Label {
    Label {
        code,
        name,
        kind: LabelKind::Technique,
        stix_id,
    }
}

pub static TACTICS: &[Label] = &[
    tactic("TA0043", "Reconnaissance", "x-mitre-tactic--2d119f66-66f5-4f47-9806-bfc1d74ce0b2"),
    tactic("TA0042", "Resource Development", "x-mitre-tactic--bdfb0196-143d-42d3-a422-3d39e50a51a6"),
    tactic("TA0001", "Initial Access", "x-mitre-tactic--ffd5bcee-6e16-4dd2-8eca-7b3beedf33ca"),
    tactic("TA0002", "Execution", "x-mitre-tactic--4ca45d45-df4d-4613-8980-bac22d278fa5"),
    tactic("TA0003", "Persistence", "x-mitre-tactic--5bc1d813-693e-4823-9961-abf9af4b0e92"),
    tactic("TA0004", "Privilege Escalation", "x-mitre-tactic--5e29b093-294e-49e9-a803-dab3d73b77dd"),
    tactic("TA0005", "Defense Evasion", "x-mitre-tactic--78b23412-0651-46d7-a540-170a1ce8bd5a"),
    tactic("TA0006", "Credential Access", "x-mitre-tactic--2558fd61-8c75-4730-94c4-11926db2a263"),
    tactic("TA0007", "Discovery", "x-mitre-tactic--c17c5845-175e-4421-9713-829d0573dbc9"),
    tactic("TA0008", "Lateral Movement", "x-mitre-tactic--7141578b-e50b-4dcc-bfa4-08a8dd689e9e"),
    tactic("TA0009", "Collection", "x-mitre-tactic--d108ce10-2419-4cf9-a774-46161d6c6cfe"),
    tactic("TA0011", "Command and Control", "x-mitre-tactic--f72804c5-f15a-449e-a5da-2eecd181f813"),
    tactic("TA0010", "Exfiltration", "x-mitre-tactic--9a4e74ab-5008-408c-84bf-a10dfbc53462"),
    tactic("TA0040", "Impact", "x-mitre-tactic--5569339b-94c2-49ee-afb3-2222936582c8"),
];

pub static TECHNIQUES: &[Label] = &[
    technique("T1595", "Active Scanning", "attack-pattern--6fc377aa-1331-45fb-93a9-31a5f93a036f"),
    technique("T1566", "Phishing", "attack-pattern--a4fa871a-bc6a-4d93-bffb-2977aa82d9ff"),
    technique("T1190", "Exploit Public-Facing Application", "attack-pattern--cfa9ad33-d99c-4a6e-9d5d-8fb62a7884d7"),
    technique("T1133", "External Remote Services", "attack-pattern--20de9da2-da0d-4617-a670-7e4878c5c539"),
    technique("T1078", "Valid Accounts", "attack-pattern--2724c441-b42a-42c0-baae-57e8ac75174d"),
    technique("T1059", "Command and Scripting Interpreter", "attack-pattern--5fdecf08-2c05-4c4c-893d-280f600da591"),
    technique("T1053", "Scheduled Task/Job", "attack-pattern--c499ed1f-331b-4caa-adae-9093ae8a82a4"),
    technique("T1204", "User Execution", "attack-pattern--9a8b0679-0004-45d2-b95c-f0307f487bae"),
    technique("T1547", "Boot or Logon Autostart Execution", "attack-pattern--21e9348f-de0c-471d-b8f3-99204cbe435e"),
    technique("T1543", "Create or Modify System Process", "attack-pattern--b0168882-67cd-47cb-afda-799bda156731"),
    technique("T1136", "Create Account", "attack-pattern--77d540d7-4bdc-4756-bae2-0c0716caff72"),
    technique("T1055", "Process Injection", "attack-pattern--0b900ed9-537f-4cca-ad00-0313e9e803f4"),
    technique("T1068", "Exploitation for Privilege Escalation", "attack-pattern--717b953d-c6e6-49e9-9258-704ee329cca6"),
    technique("T1548", "Abuse Elevation Control Mechanism", "attack-pattern--81b4e758-6ae4-41e3-b40f-4f682cd5b8f5"),
    technique("T1070", "Indicator Removal", "attack-pattern--bef1938e-236e-4f4a-bfcc-4155147785eb"),
    technique("T1027", "Obfuscated Files or Information", "attack-pattern--8867fe56-1a8d-429b-be6b-beda41116f84"),
    technique("T1036", "Masquerading", "attack-pattern--efb02ab3-984c-40cb-9d1a-859992f00ce9"),
    technique("T1562", "Impair Defenses", "attack-pattern--d40436a0-481d-4fcf-bd31-a54dfedbc6c5"),
    technique("T1003", "OS Credential Dumping", "attack-pattern--6ab53fb2-fcca-4bf2-a99f-f4421c13f54a"),
    technique("T1110", "Brute Force", "attack-pattern--688d8ce3-7d0f-401b-a8b7-beed4913cac1"),
    technique("T1555", "Credentials from Password Stores", "attack-pattern--ab37a6c2-3cc2-4cf7-bf11-a7bc4d77a052"),
    technique("T1056", "Input Capture", "attack-pattern--b41512eb-268b-47c0-b77c-e74a94b54ac8"),
    technique("T1082", "System Information Discovery", "attack-pattern--feff6e97-0dff-419f-9303-09b8e513e1dc"),
    technique("T1083", "File and Directory Discovery", "attack-pattern--8626afa2-4492-408f-bc0c-1a2167d7c331"),
    technique("T1057", "Process Discovery", "attack-pattern--6c463699-914f-49c4-ba5e-18c984a83f8e"),
    technique("T1018", "Remote System Discovery", "attack-pattern--a4a41a1a-5639-4fc5-960e-8af7013a5495"),
    technique("T1021", "Remote Services", "attack-pattern--bc183170-78ac-47d3-b3dd-da0822fd79e9"),
    technique("T1570", "Lateral Tool Transfer", "attack-pattern--abdd367c-4367-4b8f-bef0-eee8bea50c57"),
    technique("T1534", "Internal Spearphishing", "attack-pattern--6bf4cede-e6e7-47b9-9217-139c05760abd"),
    technique("T1005", "Data from Local System", "attack-pattern--9d33c20d-a960-4a4c-a484-e3e8ebdecf72"),
    technique("T1114", "Email Collection", "attack-pattern--34ea6591-84ff-4b64-a914-8a1d845899b2"),
    technique("T1560", "Archive Collected Data", "attack-pattern--b141b55c-de89-4a3a-8558-bcebdc0ccc95"),
    technique("T1071", "Application Layer Protocol", "attack-pattern--bd2a5fd3-eea6-460f-8692-11145e8c8f80"),
    technique("T1105", "Ingress Tool Transfer", "attack-pattern--dfb3b687-b8f8-4594-ad71-3d9bd59012ac"),
    technique("T1573", "Encrypted Channel", "attack-pattern--87eac930-809c-4db2-8d23-ca5b6f0ed6ed"),
    technique("T1041", "Exfiltration Over C2 Channel", "attack-pattern--3aac6458-c229-48ea-949a-085202befb45"),
    technique("T1048", "Exfiltration Over Alternative Protocol", "attack-pattern--562a440e-808d-457f-a0a7-6dfc59738bdd"),
    technique("T1486", "Data Encrypted for Impact", "attack-pattern--b0213641-bb42-4fce-b31a-7569f717cddd"),
    technique("T1490", "Inhibit System Recovery", "attack-pattern--6a2ad0a6-f0f0-4940-93ee-0351c0a30a8c"),
    technique("T1498", "Network Denial of Service", "attack-pattern--cf34bc78-f55d-4076-8971-68fca7ce68df"),
];
